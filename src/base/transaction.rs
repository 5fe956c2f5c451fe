//! Typed contract calls and transactions.
//!
//! # Responsibilities
//! - Pack call data from a `SolCall`, run it and unpack the return value
//! - Simulate state-changing calls first when safe mode is on
//! - Build transaction options, sign and broadcast

use alloy::eips::BlockId;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::base::interactions::Interactions;
use crate::base::session::Session;
use crate::base::types::InteractionResult;

/// Run a read-only call through a session and decode its return value.
pub async fn call<C: SolCall>(session: &Session, call: &C) -> InteractionResult<C::Return> {
    let opts = session.call_opts();
    let block = if opts.pending {
        BlockId::pending()
    } else {
        BlockId::latest()
    };

    let tx = TransactionRequest::default()
        .with_from(opts.from)
        .with_to(session.address())
        .with_input(call.abi_encode());

    tracing::trace!(
        contract = %session.address(),
        function = C::SIGNATURE,
        "eth_call"
    );

    let output = session.instance().provider().call(tx).block(block).await?;
    Ok(C::abi_decode_returns(&output)?)
}

/// Send a state-changing call through a session and return its hash.
///
/// In safe mode the call is simulated first and a failing simulation aborts
/// before anything is signed. A zero `value` keeps the value of the
/// transaction options.
pub async fn transact<C: SolCall>(
    interactions: &Interactions,
    session: &Session,
    call: &C,
    value: U256,
) -> InteractionResult<TxHash> {
    let input = Bytes::from(call.abi_encode());

    if interactions.safe() {
        if let Err(err) = interactions
            .verify_transaction(session.address(), input.clone(), value)
            .await
        {
            tracing::warn!(
                contract = %session.address(),
                function = C::SIGNATURE,
                error = %err,
                "Simulation failed, transaction not sent"
            );
            return Err(err);
        }
    }

    let mut opts = interactions.base_tx_setup().await?;
    if !value.is_zero() {
        opts.value = value;
    }

    interactions
        .send_transaction(session.address(), input, opts)
        .await
}
