//! Hooks for contract wrappers built on top of [`Interactions`].

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, U256};

use crate::base::{InteractionResult, Interactions};
use crate::utils::abi::encoded_function;

/// A contract wrapper that can be simulated against.
pub trait ContractImplementation {
    /// Address of the wrapped contract.
    fn address(&self) -> Address;

    /// Interactions the wrapper sends through.
    fn interactions(&self) -> &Interactions;
}

/// Simulate `function` of a JSON ABI with `params` against `contract`.
///
/// Fails when the encoding fails or the call reverts.
pub async fn simulate_call<C>(
    contract: &C,
    abi_json: &str,
    function: &str,
    params: &[DynSolValue],
) -> InteractionResult<()>
where
    C: ContractImplementation + ?Sized,
{
    let data = encoded_function(abi_json, function, params)?;
    contract
        .interactions()
        .verify_transaction(contract.address(), data, U256::ZERO)
        .await
}
