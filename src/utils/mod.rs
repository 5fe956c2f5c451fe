//! Constants, unit conversions and low-level contract lookups.

pub mod abi;
pub mod constants;
pub mod proxy;
pub mod units;

pub use units::{ether_to_wei, to_ether};
