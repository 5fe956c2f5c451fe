//! Proxy and diamond lookups used when a selector is not in a contract's own bytecode.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Selector, B256, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::base::types::InteractionResult;
use crate::contracts::IDiamondLoupe;
use crate::utils::constants::EIP1967_IMPLEMENTATION_SLOT;

/// Read the EIP-1967 implementation address of a proxy.
///
/// Returns the zero address when the slot is empty.
pub async fn implementation_address(
    provider: &(dyn Provider + Send + Sync),
    proxy: Address,
) -> InteractionResult<Address> {
    let slot = U256::from_be_bytes(EIP1967_IMPLEMENTATION_SLOT.0);
    let value = provider.get_storage_at(proxy, slot).await?;
    Ok(Address::from_word(B256::from(value.to_be_bytes::<32>())))
}

/// Ask a diamond whether one of its facets implements `selector`.
pub async fn check_diamond_function(
    provider: &(dyn Provider + Send + Sync),
    diamond: Address,
    selector: Selector,
) -> InteractionResult<bool> {
    let call = IDiamondLoupe::facetAddressCall {
        functionSelector: selector,
    };
    let tx = TransactionRequest::default()
        .with_to(diamond)
        .with_input(call.abi_encode());

    let output = provider.call(tx).await?;
    let facet = IDiamondLoupe::facetAddressCall::abi_decode_returns(&output)?;
    Ok(facet != Address::ZERO)
}
