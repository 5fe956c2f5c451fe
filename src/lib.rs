//! Typed, high-level interactions with Ethereum token contracts.
//!
//! [`Interactions`] holds the provider and signer; the token wrappers in
//! [`erc20`] and [`nft`] bind it to one contract after checking that the
//! contract exposes the expected functions.

pub mod base;
pub mod config;
pub mod contracts;
pub mod erc20;
pub mod extension;
pub mod models;
pub mod nft;
pub mod observability;
pub mod signatures;
pub mod utils;

pub use base::{CallError, InteractionError, InteractionResult, Interactions, InterfacingError};
pub use config::ClientConfig;
pub use models::TokenMeta;
