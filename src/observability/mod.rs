//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Interactions and token wrappers produce:
//!     → tracing events with structured fields (address, tx_hash, ...)
//!     → logging.rs (subscriber, env filter, fmt output)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; binaries install the subscriber
//! - Log level configurable via config and environment

pub mod logging;

pub use logging::init_logging;
