use std::io::ErrorKind;
use std::process::{Command, Output, Stdio};

use crate::error::DeployError;

use super::{DeploymentTool, EnvironmentSummary};

/// Runs the real `azd` binary.
pub struct AzdCli {
    program: String,
}

impl AzdCli {
    pub fn new() -> Self {
        Self::with_program("azd")
    }

    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn spawn_error(&self, err: std::io::Error) -> DeployError {
        if err.kind() == ErrorKind::NotFound {
            DeployError::MissingTool {
                tool: self.program.clone(),
            }
        } else {
            DeployError::Io(err)
        }
    }

    /// Runs with the terminal attached, so azd can show progress and prompt.
    fn run_interactive(&self, args: &[&str]) -> Result<(), DeployError> {
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| self.spawn_error(err))?;

        if status.success() {
            Ok(())
        } else {
            Err(DeployError::ToolFailed {
                command: self.describe(args),
                code: status.code(),
            })
        }
    }

    fn run_captured(&self, args: &[&str]) -> Result<String, DeployError> {
        let output: Output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| self.spawn_error(err))?;

        if !output.status.success() {
            return Err(DeployError::ToolFailed {
                command: self.describe(args),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for AzdCli {
    fn default() -> Self {
        Self::new()
    }
}

impl DeploymentTool for AzdCli {
    fn version(&self) -> Result<String, DeployError> {
        let output = self.run_captured(&["version"])?;
        Ok(output.trim().to_string())
    }

    fn login(&self, tenant_id: &str) -> Result<(), DeployError> {
        self.run_interactive(&["auth", "login", "--tenant-id", tenant_id])
    }

    fn list_environments(&self) -> Result<Vec<EnvironmentSummary>, DeployError> {
        let args = ["env", "list", "--output", "json"];
        let output = self.run_captured(&args)?;
        parse_environment_list(&output).map_err(|err| DeployError::UnexpectedOutput {
            command: self.describe(&args),
            reason: err.to_string(),
        })
    }

    fn new_environment(&self, name: &str) -> Result<(), DeployError> {
        self.run_interactive(&["env", "new", name])
    }

    fn select_environment(&self, name: &str) -> Result<(), DeployError> {
        self.run_interactive(&["env", "select", name])
    }

    fn set_variable(&self, key: &str, value: &str) -> Result<(), DeployError> {
        self.run_interactive(&["env", "set", key, value])
    }

    fn get_values(&self) -> Result<String, DeployError> {
        self.run_captured(&["env", "get-values"])
    }

    fn up(&self) -> Result<(), DeployError> {
        self.run_interactive(&["up"])
    }
}

/// azd prints nothing (not `[]`) when no environment exists yet.
pub fn parse_environment_list(output: &str) -> serde_json::Result<Vec<EnvironmentSummary>> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed)
}
