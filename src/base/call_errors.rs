//! Revert data decoding and call error labelling.

use alloy::hex;
use alloy::sol_types::decode_revert_reason;

use crate::base::types::{CallError, InteractionError, InteractionResult};
use crate::utils::abi::parse_abi;
use crate::utils::constants::ERROR_SELECTOR_LENGTH;

/// Decodes revert data into a readable message for one family of custom errors.
pub type RevertParser = fn(&[u8]) -> Option<String>;

/// Parser for contracts without custom errors.
pub fn no_custom_errors(_data: &[u8]) -> Option<String> {
    None
}

/// Turns failed calls into [`CallError`]s labelled `<kind>.<method>`.
#[derive(Debug, Clone, Copy)]
pub struct CallErrorBuilder {
    kind: &'static str,
    parser: RevertParser,
}

impl CallErrorBuilder {
    pub const fn new(kind: &'static str, parser: RevertParser) -> Self {
        Self { kind, parser }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Wrap `err`, replacing RPC revert errors with their decoded reason.
    pub fn wrap(&self, method: &str, err: InteractionError) -> InteractionError {
        let source = match err.revert_data() {
            Some(data) => InteractionError::ContractRevert(self.describe(&data)),
            None => err,
        };
        CallError::new(format!("{}.{}", self.kind, method), source).into()
    }

    /// Readable form of revert data.
    ///
    /// Custom errors first, then `Error(string)` / `Panic(uint256)`, then raw hex.
    pub fn describe(&self, data: &[u8]) -> String {
        if data.is_empty() {
            return "execution reverted".to_string();
        }
        (self.parser)(data)
            .or_else(|| decode_revert_reason(data))
            .unwrap_or_else(|| format!("execution reverted: 0x{}", hex::encode(data)))
    }
}

/// Name of the custom error in `abi_json` whose selector prefixes `data`.
pub fn match_errors(abi_json: &str, data: &[u8]) -> InteractionResult<Option<String>> {
    let abi = parse_abi(abi_json)?;
    if data.len() < ERROR_SELECTOR_LENGTH {
        return Err(InteractionError::InvalidRevertData(data.to_vec().into()));
    }
    let selector = &data[..ERROR_SELECTOR_LENGTH];

    Ok(abi
        .errors()
        .find(|error| error.selector().as_slice() == selector)
        .map(|error| error.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::types::InterfacingError;
    use alloy::sol_types::{Revert, SolError};

    const ERRORS_ABI: &str = r#"[
        {"type": "error", "name": "NotOwner", "inputs": []},
        {"type": "error", "name": "TooLate", "inputs": [{"name": "deadline", "type": "uint256"}]}
    ]"#;

    fn always_custom(data: &[u8]) -> Option<String> {
        (data.first() == Some(&0xff)).then(|| "Custom".to_string())
    }

    #[test]
    fn test_match_errors() {
        let selector = alloy::primitives::keccak256("NotOwner()");
        let name = match_errors(ERRORS_ABI, &selector[..4]).unwrap();
        assert_eq!(name.as_deref(), Some("NotOwner"));

        let name = match_errors(ERRORS_ABI, &[0, 0, 0, 0]).unwrap();
        assert!(name.is_none());
    }

    #[test]
    fn test_match_errors_short_data() {
        let err = match_errors(ERRORS_ABI, &[0x01]).unwrap_err();
        assert!(matches!(err, InteractionError::InvalidRevertData(_)));
    }

    #[test]
    fn test_describe_fallbacks() {
        let builder = CallErrorBuilder::new("erc20", always_custom);
        assert_eq!(builder.describe(&[0xff, 0, 0, 0]), "Custom");
        assert_eq!(builder.describe(&[]), "execution reverted");

        let revert = Revert {
            reason: "not allowed".to_string(),
        }
        .abi_encode();
        assert!(builder.describe(&revert).contains("not allowed"));
    }

    #[test]
    fn test_wrap_keeps_non_revert_errors() {
        let builder = CallErrorBuilder::new("nft", no_custom_errors);
        let wrapped = builder.wrap(
            "name()",
            InterfacingError::new("CheckSignatures", InteractionError::NoOwnedToken).into(),
        );
        let message = wrapped.to_string();
        assert!(message.starts_with("call error on nft.name(): interface setup error"));
    }
}
