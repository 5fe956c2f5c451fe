//! Private key loading.
//!
//! # Security
//! - Private keys are read from a hex string or from an environment variable
//! - Keys are never logged or serialized

use alloy::signers::local::PrivateKeySigner;

use crate::base::types::{InteractionError, InteractionResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "ETH_INTERFACES_PRIVATE_KEY";

/// Create a signer from a hex-encoded private key, with or without `0x`.
pub fn signer_from_private_key(private_key_hex: &str) -> InteractionResult<PrivateKeySigner> {
    let key_hex = private_key_hex.trim();
    let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

    key_hex
        .parse()
        .map_err(|e| InteractionError::Wallet(format!("Invalid private key format: {}", e)))
}

/// Load a signer from `ETH_INTERFACES_PRIVATE_KEY`.
pub fn signer_from_env() -> InteractionResult<PrivateKeySigner> {
    let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
        InteractionError::Wallet(format!(
            "Environment variable {} not set",
            PRIVATE_KEY_ENV_VAR
        ))
    })?;

    signer_from_private_key(&private_key)
}
