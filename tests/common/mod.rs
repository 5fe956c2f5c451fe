//! Shared utilities for integration tests against a mocked RPC endpoint.

#![allow(dead_code)]

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, B256, U128, U256, U64};
use alloy::providers::ProviderBuilder;
use alloy::rpc::json_rpc::ErrorPayload;
use alloy::transports::mock::Asserter;
use serde_json::json;

use eth_interfaces::base::{signer_from_private_key, Interactions, SharedProvider};
use eth_interfaces::signatures::Signature;

/// Anvil's first account.
pub const PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const SIGNER: Address = alloy::primitives::address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

pub const TOKEN: Address = alloy::primitives::address!("5FbDB2315678afecb367f032d93F642f64180aa3");
pub const RECIPIENT: Address = alloy::primitives::address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

pub const GAS_PRICE: u128 = 1_000_000_000;
pub const CHAIN_ID: u64 = 31337;

/// Provider whose responses are served in order by the returned asserter.
pub fn mocked_provider() -> (Asserter, SharedProvider) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    (asserter, Arc::new(provider))
}

/// Interactions for Anvil's first account over a mocked provider.
pub async fn mocked_interactions() -> (Asserter, Interactions) {
    let (asserter, provider) = mocked_provider();
    asserter.push_success(&U64::from(1));

    let signer = signer_from_private_key(PRIVATE_KEY).unwrap();
    let interactions = Interactions::new(provider, signer).await.unwrap();
    (asserter, interactions)
}

/// Fake runtime bytecode dispatching on the given selectors.
pub fn bytecode<S: Signature>(signatures: &[S]) -> Bytes {
    let mut code = vec![0x60, 0x80, 0x60, 0x40, 0x52];
    for sig in signatures {
        code.push(0x63);
        code.extend_from_slice(sig.selector().as_slice());
        code.extend_from_slice(&[0x14, 0x61, 0x00, 0x00, 0x57]);
    }
    code.push(0x00);
    Bytes::from(code)
}

/// JSON-RPC error carrying revert data, as returned by geth for `execution reverted`.
pub fn revert(data: &[u8]) -> ErrorPayload {
    let data = format!("0x{}", alloy::hex::encode(data));
    ErrorPayload {
        code: 3,
        message: "execution reverted".into(),
        data: Some(serde_json::value::to_raw_value(&data).unwrap()),
    }
}

/// Responses consumed by the default transaction options setup.
pub fn push_tx_setup(asserter: &Asserter, nonce: u64) {
    asserter.push_success(&U128::from(GAS_PRICE));
    asserter.push_success(&U64::from(nonce));
    asserter.push_success(&U64::from(CHAIN_ID));
}

/// Responses consumed by a transaction send once its options are known.
pub fn push_send(asserter: &Asserter, gas: u64, tx_hash: B256) {
    asserter.push_success(&U64::from(gas));
    asserter.push_success(&tx_hash);
}

pub fn word(value: U256) -> Bytes {
    Bytes::from(value.to_be_bytes::<32>().to_vec())
}

/// Legacy transaction receipt.
pub fn receipt(tx_hash: B256, success: bool) -> serde_json::Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0x11),
        "blockNumber": "0x10",
        "from": SIGNER,
        "to": RECIPIENT,
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "contractAddress": null,
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "status": if success { "0x1" } else { "0x0" },
        "effectiveGasPrice": "0x3b9aca00",
        "type": "0x0"
    })
}
