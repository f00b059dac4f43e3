use serde::{Deserialize, Serialize};

pub const DEFAULT_TENANT_ID: &str = "3f6a9c21-7d4e-4b8a-a5c2-91e0d8b47f13";
pub const DEFAULT_SUBSCRIPTION_ID: &str = "8c9e7b4a-2f1d-4e6b-9a3c-5d0f1e2a7b64";
pub const DEFAULT_LOCATION: &str = "westus2";
pub const DEFAULT_ENVIRONMENT_NAME: &str = "dev";
pub const DEFAULT_ENDPOINT_KEY: &str = "SERVICE_API_URI";

/// Settings for one run, fixed once `main` has built them.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployConfig {
    pub tenant_id: String,
    pub subscription_id: String,
    pub location: String,
    pub environment_name: String,
    /// Output variable of the environment holding the service URL.
    pub endpoint_key: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            subscription_id: DEFAULT_SUBSCRIPTION_ID.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            environment_name: DEFAULT_ENVIRONMENT_NAME.to_string(),
            endpoint_key: DEFAULT_ENDPOINT_KEY.to_string(),
        }
    }
}

/// Contents of `deployer.json`. Every field is optional.
#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub environment_name: Option<String>,
    #[serde(default)]
    pub endpoint_key: Option<String>,
}

pub struct RunOptions {
    pub skip_auth: bool,
}
