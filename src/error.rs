use thiserror::Error;

/// Fatal failures of a deployment run.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("Invalid environment name '{name}': {reason}")]
    InvalidEnvironmentName { name: String, reason: String },

    #[error("Required tool '{tool}' was not found")]
    MissingTool { tool: String },

    #[error("Authentication failed for tenant {tenant}")]
    AuthenticationFailed { tenant: String },

    #[error("Deployment failed")]
    DeploymentFailed,

    /// A sub-command ran but exited non-zero.
    #[error("'{command}' exited with status {}", code.map_or("unknown".to_string(), |c| c.to_string()))]
    ToolFailed { command: String, code: Option<i32> },

    #[error("Unexpected output from '{command}': {reason}")]
    UnexpectedOutput { command: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Remediation text printed under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArguments(_) => Some("Run with --help to see the available options."),
            Self::Config { .. } => {
                Some("Fix or remove the config file; every field is optional.")
            }
            Self::InvalidEnvironmentName { .. } => {
                Some("Environment names must be non-empty and contain no whitespace.")
            }
            Self::MissingTool { .. } => Some(
                "Install the Azure Developer CLI: https://aka.ms/azd-install and re-run this command.",
            ),
            Self::AuthenticationFailed { .. } => {
                Some("Check your account has access to the tenant, or re-run with --skip-auth if already logged in.")
            }
            Self::DeploymentFailed => {
                Some("See the troubleshooting steps above, then re-run the deployment.")
            }
            Self::ToolFailed { .. } | Self::UnexpectedOutput { .. } | Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code() {
        assert_eq!(DeployError::DeploymentFailed.exit_code(), 1);
        assert_eq!(
            DeployError::MissingTool {
                tool: "azd".to_string()
            }
            .exit_code(),
            1
        );
        assert_eq!(
            DeployError::ToolFailed {
                command: "azd env new dev".to_string(),
                code: Some(3)
            }
            .exit_code(),
            3
        );
        // Killed by a signal
        assert_eq!(
            DeployError::ToolFailed {
                command: "azd env set".to_string(),
                code: None
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_tool_failed_message() {
        let err = DeployError::ToolFailed {
            command: "azd env select dev".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "'azd env select dev' exited with status 2");
        assert!(err.hint().is_none());
    }
}
