use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::cli::Args;
use crate::error::DeployError;

use super::{ConfigFile, DeployConfig};

pub const DEFAULT_CONFIG_FILE: &str = "deployer.json";

/// Reads the config file. The default file may be absent; an explicit one may not.
pub fn load_config_file(path: &Path, explicit: bool) -> Result<ConfigFile, DeployError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
            return Ok(ConfigFile::default())
        }
        Err(err) => {
            return Err(DeployError::Config {
                path: path.display().to_string(),
                reason: err.to_string(),
            })
        }
    };

    serde_json::from_str(&raw).map_err(|err| DeployError::Config {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

/// Merges flags over the file over built-in defaults.
pub fn resolve_config(args: &Args, file: ConfigFile) -> Result<DeployConfig, DeployError> {
    let defaults = DeployConfig::default();

    let config = DeployConfig {
        tenant_id: file.tenant_id.unwrap_or(defaults.tenant_id),
        subscription_id: file.subscription_id.unwrap_or(defaults.subscription_id),
        location: args
            .location
            .clone()
            .or(file.location)
            .unwrap_or(defaults.location),
        environment_name: args
            .environment_name
            .clone()
            .or(file.environment_name)
            .unwrap_or(defaults.environment_name),
        endpoint_key: file.endpoint_key.unwrap_or(defaults.endpoint_key),
    };

    validate_environment_name(&config.environment_name)?;
    if config.location.trim().is_empty() {
        return Err(DeployError::InvalidArguments(
            "location must not be empty".to_string(),
        ));
    }

    Ok(config)
}

pub fn load_config(args: &Args) -> Result<DeployConfig, DeployError> {
    let file = match &args.config {
        Some(path) => load_config_file(Path::new(path), true)?,
        None => load_config_file(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    resolve_config(args, file)
}

pub fn validate_environment_name(name: &str) -> Result<(), DeployError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else {
        return Ok(());
    };

    Err(DeployError::InvalidEnvironmentName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_LOCATION, DEFAULT_TENANT_ID};
    use std::fs;
    use tempfile::NamedTempFile;

    fn args() -> Args {
        Args {
            environment_name: None,
            skip_auth: false,
            location: None,
            config: None,
            help: false,
        }
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(&args(), ConfigFile::default()).unwrap();
        assert_eq!(config, DeployConfig::default());
        assert_eq!(config.location, DEFAULT_LOCATION);
        assert_eq!(config.tenant_id, DEFAULT_TENANT_ID);
    }

    #[test]
    fn test_flags_override_file() {
        let file = ConfigFile {
            location: Some("centralus".to_string()),
            environment_name: Some("qa".to_string()),
            tenant_id: Some("tenant-from-file".to_string()),
            ..ConfigFile::default()
        };
        let mut args = args();
        args.location = Some("eastus".to_string());

        let config = resolve_config(&args, file).unwrap();
        assert_eq!(config.location, "eastus");
        assert_eq!(config.environment_name, "qa");
        assert_eq!(config.tenant_id, "tenant-from-file");
    }

    #[test]
    fn test_load_config_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            r#"{ "location": "centralus", "endpointKey": "API_URL" }"#,
        )
        .unwrap();

        let file = load_config_file(temp_file.path(), true).unwrap();
        assert_eq!(file.location.as_deref(), Some("centralus"));
        assert_eq!(file.endpoint_key.as_deref(), Some("API_URL"));
        assert!(file.tenant_id.is_none());
    }

    #[test]
    fn test_malformed_config_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r#"{ "region": "centralus" }"#).unwrap();

        let err = load_config_file(temp_file.path(), true).unwrap_err();
        assert!(matches!(err, DeployError::Config { .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployer.json");

        assert_eq!(
            load_config_file(&path, false).unwrap(),
            ConfigFile::default()
        );
        assert!(load_config_file(&path, true).is_err());
    }

    #[test]
    fn test_validate_environment_name() {
        assert!(validate_environment_name("dev").is_ok());
        assert!(validate_environment_name("team-a_01").is_ok());
        assert!(validate_environment_name("").is_err());
        assert!(validate_environment_name("my env").is_err());
    }

    #[test]
    fn test_empty_environment_flag_rejected() {
        let mut args = args();
        args.environment_name = Some(String::new());
        let err = resolve_config(&args, ConfigFile::default()).unwrap_err();
        assert!(matches!(err, DeployError::InvalidEnvironmentName { .. }));
    }
}
