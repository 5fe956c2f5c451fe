//! ERC20 wrappers against a mocked RPC endpoint.

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::sol_types::{Revert, SolCall, SolError};

use eth_interfaces::base::{InteractionError, Interactions};
use eth_interfaces::contracts::{IERC20Errors, IERC20};
use eth_interfaces::erc20::{
    Erc20BurnableInteractions, Erc20BurnableSignature, Erc20Interactions, Erc20Signature,
};
use eth_interfaces::models::TokenMeta;
use eth_interfaces::signatures::RawSignature;

mod common;

use common::*;

async fn token() -> (alloy::transports::mock::Asserter, Erc20Interactions) {
    let (asserter, interactions) = mocked_interactions().await;
    asserter.push_success(&bytecode(Erc20Signature::ALL));
    let token = Erc20Interactions::new(interactions, TOKEN, Erc20Signature::ALL)
        .await
        .unwrap();
    (asserter, token)
}

#[tokio::test]
async fn test_token_meta_infos() {
    let (asserter, token) = token().await;
    asserter.push_success(&Bytes::from(IERC20::nameCall::abi_encode_returns(
        &"Wrapped Ether".to_string(),
    )));
    asserter.push_success(&Bytes::from(IERC20::symbolCall::abi_encode_returns(
        &"WETH".to_string(),
    )));

    let meta = token.token_meta_infos().await.unwrap();
    assert_eq!(
        meta,
        TokenMeta {
            name: "Wrapped Ether".into(),
            symbol: "WETH".into(),
            uri: None,
        }
    );
}

#[tokio::test]
async fn test_reads() {
    let (asserter, token) = token().await;
    asserter.push_success(&word(U256::from(1_500)));
    asserter.push_success(&word(U256::from(18)));
    asserter.push_success(&word(U256::from(10u128.pow(24))));
    asserter.push_success(&word(U256::from(250)));

    assert_eq!(token.get_balance().await.unwrap(), U256::from(1_500));
    assert_eq!(token.decimals().await.unwrap(), 18);
    assert_eq!(token.total_supply().await.unwrap(), U256::from(10u128.pow(24)));
    assert_eq!(
        token.allowance(SIGNER, RECIPIENT).await.unwrap(),
        U256::from(250)
    );
}

#[tokio::test]
async fn test_new_rejects_missing_functions() {
    let (asserter, interactions) = mocked_interactions().await;
    asserter.push_success(&bytecode(&[RawSignature::from("name()")]));
    asserter.push_success(&U256::ZERO);
    for _ in 1..Erc20Signature::ALL.len() {
        asserter.push_failure_msg("method not found");
    }

    let err = Erc20Interactions::new(interactions, TOKEN, Erc20Signature::ALL)
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("interface setup error function CheckSignatures"));
    assert!(message.contains("transfer(address,uint256): a9059cbb"));
    assert!(!message.contains("name()"));
}

#[tokio::test]
async fn test_transfer_to() {
    let (asserter, token) = token().await;
    let tx_hash = B256::repeat_byte(0x21);
    push_tx_setup(&asserter, 0);
    push_send(&asserter, 52_000, tx_hash);

    let sent = token.transfer_to(RECIPIENT, U256::from(10)).await.unwrap();
    assert_eq!(sent, tx_hash);
}

#[tokio::test]
async fn test_transfer_revert_is_decoded() {
    let (asserter, token) = token().await;
    push_tx_setup(&asserter, 0);
    let data = IERC20Errors::ERC20InsufficientBalance {
        sender: SIGNER,
        balance: U256::from(5),
        needed: U256::from(10),
    }
    .abi_encode();
    asserter.push_failure(revert(&data));

    let err = token.transfer_to(RECIPIENT, U256::from(10)).await.unwrap_err();
    assert!(matches!(err, InteractionError::Call(_)));
    assert_eq!(
        err.to_string(),
        "call error on erc20.transfer(): ERC20InsufficientBalance: balance 5, required: 10"
    );
}

#[tokio::test]
async fn test_safe_mode_decodes_revert_string() {
    let (asserter, interactions) = mocked_interactions().await;
    let interactions: Interactions = interactions.with_safe_mode(true);
    asserter.push_success(&bytecode(Erc20Signature::ALL));
    let token = Erc20Interactions::new(interactions, TOKEN, Erc20Signature::ALL)
        .await
        .unwrap();

    let data = Revert {
        reason: "approve to the zero address".to_string(),
    }
    .abi_encode();
    asserter.push_failure(revert(&data));

    let err = token.approve(Address::ZERO, U256::from(1)).await.unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("call error on erc20.approve(): "));
    assert!(message.contains("approve to the zero address"));
}

#[tokio::test]
async fn test_burn_revert_is_decoded() {
    let (asserter, token) = token().await;
    asserter.push_success(&bytecode(Erc20BurnableSignature::ALL));
    let burnable = Erc20BurnableInteractions::new(token, Erc20BurnableSignature::ALL)
        .await
        .unwrap();

    push_tx_setup(&asserter, 0);
    let data = IERC20Errors::ERC20InsufficientBalance {
        sender: SIGNER,
        balance: U256::ZERO,
        needed: U256::from(1),
    }
    .abi_encode();
    asserter.push_failure(revert(&data));

    let err = burnable.burn(U256::from(1)).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "call error on erc20.burn(): ERC20InsufficientBalance: balance 0, required: 1"
    );
}

#[tokio::test]
async fn test_burn_from() {
    let (asserter, token) = token().await;
    asserter.push_success(&bytecode(Erc20BurnableSignature::ALL));
    let burnable = Erc20BurnableInteractions::new(token, Erc20BurnableSignature::ALL)
        .await
        .unwrap();

    let tx_hash = B256::repeat_byte(0xbb);
    push_tx_setup(&asserter, 4);
    push_send(&asserter, 40_000, tx_hash);

    let sent = burnable.burn_from(RECIPIENT, U256::from(3)).await.unwrap();
    assert_eq!(sent, tx_hash);
    assert_eq!(burnable.erc20().session().address(), TOKEN);
}

#[tokio::test]
async fn test_burnable_requires_burn_functions() {
    let (asserter, token) = token().await;
    asserter.push_success(&bytecode(Erc20Signature::ALL));
    asserter.push_success(&U256::ZERO);
    asserter.push_failure_msg("method not found");
    asserter.push_failure_msg("method not found");

    let err = Erc20BurnableInteractions::new(token, Erc20BurnableSignature::ALL)
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with(
        "interface setup error function ierc20Burnable, error : interface setup error function CheckSignatures"
    ));
    assert!(message.contains("burn(uint256): 42966c68"));
    assert!(message.contains("burnFrom(address,uint256): 79cc6790"));
}
