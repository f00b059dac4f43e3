use serde::Deserialize;

use crate::error::DeployError;

pub use self::commands::AzdCli;
pub use self::values::extract_value;

mod commands;
mod values;

/// One entry of `azd env list --output json`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EnvironmentSummary {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "IsDefault", default)]
    pub is_default: bool,
}

/// The external deployment CLI, one method per sub-command used.
pub trait DeploymentTool {
    /// Installed version; `MissingTool` when the binary cannot be run.
    fn version(&self) -> Result<String, DeployError>;
    fn login(&self, tenant_id: &str) -> Result<(), DeployError>;
    fn list_environments(&self) -> Result<Vec<EnvironmentSummary>, DeployError>;
    fn new_environment(&self, name: &str) -> Result<(), DeployError>;
    fn select_environment(&self, name: &str) -> Result<(), DeployError>;
    fn set_variable(&self, key: &str, value: &str) -> Result<(), DeployError>;
    /// Raw dotenv-style `KEY="value"` lines of the selected environment.
    fn get_values(&self) -> Result<String, DeployError>;
    /// Provisions and deploys; blocks until done.
    fn up(&self) -> Result<(), DeployError>;
}
