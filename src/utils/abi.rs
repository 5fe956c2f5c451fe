//! JSON ABI helpers for calls that have no static binding.

use alloy::dyn_abi::{DynSolValue, JsonAbiExt};
use alloy::hex;
use alloy::json_abi::JsonAbi;
use alloy::primitives::Bytes;

use crate::base::types::{InteractionError, InteractionResult};

/// Parse a JSON ABI document.
pub fn parse_abi(abi_json: &str) -> InteractionResult<JsonAbi> {
    serde_json::from_str(abi_json).map_err(|e| InteractionError::Abi(format!("invalid ABI: {e}")))
}

/// Encode a call to `function` with `params` against a JSON ABI.
///
/// Overloaded functions resolve to their first declaration.
pub fn encoded_function(
    abi_json: &str,
    function: &str,
    params: &[DynSolValue],
) -> InteractionResult<Bytes> {
    let abi = parse_abi(abi_json)?;
    let func = abi
        .function(function)
        .and_then(|overloads| overloads.first())
        .ok_or_else(|| InteractionError::Abi(format!("function {function} not found in ABI")))?;

    func.abi_encode_input(params)
        .map(Bytes::from)
        .map_err(|e| InteractionError::Abi(format!("failed to encode {function}: {e}")))
}

/// Decode hex error data, with or without `0x`.
pub fn decode_error_data(data: &str) -> InteractionResult<Bytes> {
    hex::decode(data.trim())
        .map(Bytes::from)
        .map_err(|e| InteractionError::Abi(format!("invalid error data: {e}")))
}
