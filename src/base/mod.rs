//! Contract interaction core.
//!
//! # Data Flow
//! ```text
//! ETH_INTERFACES_PRIVATE_KEY
//!     → wallet.rs (key loading)
//!     → interactions.rs (provider, signer, tx options, confirmation)
//!     → session.rs (per-contract call options)
//!     → transaction.rs (typed call / transact)
//!     → call_errors.rs (revert data → labelled CallError)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables or explicit arguments
//! - Never log private keys

pub mod call_errors;
pub mod interactions;
pub mod session;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use call_errors::{match_errors, CallErrorBuilder};
pub use interactions::Interactions;
pub use session::{BoundContract, Session};
pub use types::{
    CallError, CallOpts, InteractionError, InteractionResult, InterfacingError, SharedProvider,
    TxOpts, TxOptsBuilder,
};
pub use wallet::{signer_from_env, signer_from_private_key};
