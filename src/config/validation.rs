//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs and addresses
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use alloy::primitives::Address;
use url::Url;

use crate::config::schema::ClientConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// One rejected configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check every field of `config`, collecting all problems.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.rpc_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "rpc_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("rpc_url", e.to_string())),
    }

    if let Some(explorer) = &config.explorer_url {
        match Url::parse(explorer) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(_) => errors.push(ValidationError::new(
                "explorer_url",
                "must be an http(s) URL",
            )),
            Err(e) => errors.push(ValidationError::new("explorer_url", e.to_string())),
        }
    }

    if config.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "confirmation_timeout_secs",
            "must be greater than 0",
        ));
    }

    if config.poll_interval_ms == 0 {
        errors.push(ValidationError::new("poll_interval_ms", "must be greater than 0"));
    }

    if let Some(disperse) = &config.disperse_address {
        if disperse.parse::<Address>().is_err() {
            errors.push(ValidationError::new(
                "disperse_address",
                format!("invalid address '{}'", disperse),
            ));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ClientConfig::default();
        config.rpc_url = "not a url".into();
        config.explorer_url = Some("ftp://explorer".into());
        config.confirmation_timeout_secs = 0;
        config.poll_interval_ms = 0;
        config.disperse_address = Some("0x1234".into());
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "rpc_url",
                "explorer_url",
                "confirmation_timeout_secs",
                "poll_interval_ms",
                "disperse_address",
                "observability.log_level",
            ]
        );
    }

    #[test]
    fn test_rejects_websocket_rpc() {
        let config = ClientConfig {
            rpc_url: "ws://localhost:8546".into(),
            ..ClientConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("ws"));
    }
}
