//! Shared types and error definitions.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::Provider;
use alloy::transports::TransportError;
use thiserror::Error;

/// Errors that can occur while interacting with contracts.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Transport(#[from] TransportError),

    /// RPC request failed during a labelled setup step.
    #[error("failed to {step}: {source}")]
    Setup {
        step: &'static str,
        #[source]
        source: TransportError,
    },

    /// Return data could not be decoded.
    #[error("failed to decode return data: {0}")]
    Decode(#[from] alloy::sol_types::Error),

    /// JSON ABI could not be parsed or encoded against.
    #[error("ABI error: {0}")]
    Abi(String),

    /// Amount could not be converted to wei.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid private key format.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transaction could not be built or signed.
    #[error("failed to sign the tx: {0}")]
    Signing(String),

    /// Configuration could not be used.
    #[error("Config error: {0}")]
    Config(String),

    /// Connected chain differs from the configured one.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Selectors found neither in the contract, its implementation nor its facets.
    #[error("not supported functions: {}", .0.join(", "))]
    UnsupportedFunctions(Vec<String>),

    /// A contract call failed.
    #[error(transparent)]
    Call(#[from] CallError),

    /// A contract does not expose the expected interface.
    #[error(transparent)]
    Interfacing(#[from] InterfacingError),

    /// The contract reverted with a decoded reason.
    #[error("{0}")]
    ContractRevert(String),

    /// Revert data is shorter than an error selector.
    #[error("invalid error data: {0}")]
    InvalidRevertData(Bytes),

    /// Gas cost is larger than the whole balance.
    #[error("fees exceed balances, fees: {fees} ETH, balance: {balance} ETH")]
    FeesExceedBalance { fees: f64, balance: f64 },

    /// Balance does not cover value plus fees.
    #[error("insufficient balance for the transfer, value + fees: {required} ETH, balance: {balance} ETH")]
    InsufficientBalance { required: f64, balance: f64 },

    /// No disperse contract address was configured.
    #[error("disperse contract not initialized")]
    DisperseNotInitialized,

    /// A multi-recipient transfer was requested with no recipient.
    #[error("no recipients given")]
    NoRecipients,

    /// Recipients and amounts of a multi-recipient transfer differ in length.
    #[error("{recipients} recipients but {values} values")]
    RecipientsValuesMismatch { recipients: usize, values: usize },

    /// Token scan found nothing transferable.
    #[error("no nft found from signer")]
    NoOwnedToken,

    /// Transaction was not mined within the configured wait.
    #[error("transaction {0} not mined after {1} seconds")]
    ConfirmationTimeout(TxHash, u64),

    /// Transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
}

impl InteractionError {
    /// Revert payload carried by an RPC error response, if any.
    pub fn revert_data(&self) -> Option<Bytes> {
        match self {
            Self::Transport(err) | Self::Setup { source: err, .. } => {
                err.as_error_resp().and_then(|payload| payload.as_revert_data())
            }
            _ => None,
        }
    }
}

/// Provider shared by every session of an [`Interactions`](crate::base::Interactions).
pub type SharedProvider = Arc<dyn Provider + Send + Sync>;

/// Result type for contract interactions.
pub type InteractionResult<T> = Result<T, InteractionError>;

/// A failed contract call, labelled with the method that was invoked.
#[derive(Debug, Error)]
#[error("call error on {method}: {source}")]
pub struct CallError {
    pub method: String,
    #[source]
    pub source: Box<InteractionError>,
}

impl CallError {
    pub fn new(method: impl Into<String>, source: InteractionError) -> Self {
        Self {
            method: method.into(),
            source: Box::new(source),
        }
    }
}

/// Interface setup failure, labelled with the step that rejected the contract.
#[derive(Debug, Error)]
#[error("interface setup error function {interface}, error : {source}")]
pub struct InterfacingError {
    pub interface: String,
    #[source]
    pub source: Box<InteractionError>,
}

impl InterfacingError {
    pub fn new(interface: impl Into<String>, source: InteractionError) -> Self {
        Self {
            interface: interface.into(),
            source: Box::new(source),
        }
    }
}

/// Options for a state-changing transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOpts {
    pub from: Address,
    pub nonce: u64,
    pub gas_price: u128,
    /// Estimated at send time when unset.
    pub gas_limit: Option<u64>,
    pub value: U256,
    pub chain_id: u64,
}

/// Options for a read-only call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallOpts {
    pub from: Address,
    /// Query the pending block instead of the latest one.
    pub pending: bool,
}

/// Injectable replacement for the default transaction options setup.
pub type TxOptsBuilder = Arc<dyn Fn() -> InteractionResult<TxOpts> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_error_display() {
        let err = CallError::new(
            "erc20.burn()",
            InteractionError::ContractRevert("ERC20InsufficientBalance: balance 0, required: 1".into()),
        );
        assert_eq!(
            err.to_string(),
            "call error on erc20.burn(): ERC20InsufficientBalance: balance 0, required: 1"
        );
    }

    #[test]
    fn test_interfacing_error_display() {
        let err = InterfacingError::new("CheckSignatures", InteractionError::NoRecipients);
        assert!(err
            .to_string()
            .starts_with("interface setup error function CheckSignatures, error :"));
    }

    #[test]
    fn test_error_display() {
        let err = InteractionError::FeesExceedBalance {
            fees: 0.5,
            balance: 0.25,
        };
        assert!(err.to_string().contains("0.5"));
        assert!(err.to_string().contains("0.25"));
        assert!(InteractionError::NoOwnedToken.revert_data().is_none());

        let err = InteractionError::RecipientsValuesMismatch {
            recipients: 3,
            values: 2,
        };
        assert_eq!(err.to_string(), "3 recipients but 2 values");
    }
}
