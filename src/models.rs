//! Plain data returned by the token wrappers.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Descriptive metadata of a token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenMeta {
    pub name: String,
    pub symbol: String,
    /// Token URI, for NFTs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// ERC2981 royalty for a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyInfo {
    pub receiver: Address,
    pub royalty_amount: U256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_meta_serialization() {
        let meta = TokenMeta {
            name: "Token".into(),
            symbol: "TKN".into(),
            uri: None,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"name":"Token","symbol":"TKN"}"#);

        let parsed: TokenMeta =
            serde_json::from_str(r#"{"name":"N","symbol":"S","uri":"ipfs://x"}"#).unwrap();
        assert_eq!(parsed.uri.as_deref(), Some("ipfs://x"));
    }
}
