//! ERC20 burnable extension.

use alloy::primitives::{Address, TxHash, U256};

use crate::base::transaction::transact;
use crate::base::{InteractionError, InteractionResult, Interactions, InterfacingError};
use crate::contracts::IERC20Burnable;
use crate::erc20::signatures::Erc20BurnableSignature;
use crate::erc20::{Erc20Interactions, CALL_ERRORS};
use crate::extension::ContractImplementation;

/// ERC20 interactions of a token that also exposes `burn` and `burnFrom`.
#[derive(Debug, Clone)]
pub struct Erc20BurnableInteractions {
    erc20: Erc20Interactions,
}

impl Erc20BurnableInteractions {
    pub async fn new(
        erc20: Erc20Interactions,
        signatures: &[Erc20BurnableSignature],
    ) -> InteractionResult<Self> {
        erc20
            .interactions()
            .check_signatures(erc20.address(), signatures)
            .await
            .map_err(|e| InterfacingError::new("ierc20Burnable", InteractionError::from(e)))?;

        Ok(Self { erc20 })
    }

    /// Base ERC20 operations of the token.
    pub fn erc20(&self) -> &Erc20Interactions {
        &self.erc20
    }

    /// Destroy `qty` tokens of the signer.
    pub async fn burn(&self, qty: U256) -> InteractionResult<TxHash> {
        let call = IERC20Burnable::burnCall { value: qty };
        transact(self.interactions(), self.erc20.session(), &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("burn()", e))
    }

    /// Destroy `qty` tokens of `from` using the signer's allowance.
    pub async fn burn_from(&self, from: Address, qty: U256) -> InteractionResult<TxHash> {
        let call = IERC20Burnable::burnFromCall {
            account: from,
            value: qty,
        };
        transact(self.interactions(), self.erc20.session(), &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("burnFrom()", e))
    }
}

impl ContractImplementation for Erc20BurnableInteractions {
    fn address(&self) -> Address {
        self.erc20.address()
    }

    fn interactions(&self) -> &Interactions {
        self.erc20.interactions()
    }
}
