//! Per-contract call sessions.

use std::fmt;

use alloy::primitives::Address;
use alloy::providers::Provider;

use crate::base::types::{CallOpts, SharedProvider};

/// Contract address bound to the provider that reaches it.
#[derive(Clone)]
pub struct BoundContract {
    address: Address,
    provider: SharedProvider,
}

impl BoundContract {
    pub fn new(address: Address, provider: SharedProvider) -> Self {
        Self { address, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn provider(&self) -> &(dyn Provider + Send + Sync) {
        self.provider.as_ref()
    }
}

impl fmt::Debug for BoundContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundContract")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Call options paired with a bound contract.
#[derive(Debug, Clone)]
pub struct Session {
    call_opts: CallOpts,
    instance: BoundContract,
}

impl Session {
    pub fn new(call_opts: CallOpts, instance: BoundContract) -> Self {
        Self {
            call_opts,
            instance,
        }
    }

    /// Options applied to read-only calls.
    pub fn call_opts(&self) -> &CallOpts {
        &self.call_opts
    }

    /// The bound contract.
    pub fn instance(&self) -> &BoundContract {
        &self.instance
    }

    /// Address of the bound contract.
    pub fn address(&self) -> Address {
        self.instance.address
    }
}
