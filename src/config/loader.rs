//! Client configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Errors raised while loading a client configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for a client configuration.
    #[error("cannot parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration parsed but some fields are unusable.
    #[error("invalid config {}: {}", .path.display(), join_errors(.errors))]
    Validation {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read `path`, parse it as TOML and validate every field.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ClientConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&config).map_err(|errors| ConfigError::Validation {
        path: path.to_path_buf(),
        errors,
    })?;

    tracing::debug!(path = %path.display(), rpc_url = %config.rpc_url, "Client config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/client.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read config /nonexistent/client.toml"));
    }

    #[test]
    fn test_load_and_validate() {
        let dir = std::env::temp_dir().join(format!("eth-interfaces-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        fs::write(&good, "rpc_url = \"http://127.0.0.1:8545\"\nsafe_mode = true\n").unwrap();
        let config = load_config(&good).unwrap();
        assert!(config.safe_mode);

        let bad = dir.join("bad.toml");
        fs::write(&bad, "poll_interval_ms = 0\nconfirmation_timeout_secs = 0\n").unwrap();
        let err = load_config(&bad).unwrap_err();
        match &err {
            ConfigError::Validation { path, errors } => {
                assert_eq!(path, &bad);
                assert_eq!(errors.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("bad.toml"));
        assert!(err.to_string().contains("poll_interval_ms: must be greater than 0"));

        let garbage = dir.join("garbage.toml");
        fs::write(&garbage, "rpc_url = [").unwrap();
        let err = load_config(&garbage).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("garbage.toml"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
