//! ERC20 token interactions.

pub mod burnable;
pub mod signatures;

use alloy::primitives::{Address, TxHash, U256};
use alloy::sol_types::SolInterface;

use crate::base::call_errors::CallErrorBuilder;
use crate::base::transaction::{call, transact};
use crate::base::{CallOpts, InteractionResult, Interactions, Session, TxOpts};
use crate::contracts::IERC20;
use crate::contracts::IERC20Errors::IERC20ErrorsErrors;
use crate::extension::ContractImplementation;
use crate::models::TokenMeta;

pub use burnable::Erc20BurnableInteractions;
pub use signatures::{Erc20BurnableSignature, Erc20Signature};

pub(crate) const CALL_ERRORS: CallErrorBuilder = CallErrorBuilder::new("erc20", parse_error);

/// Readable message for ERC-6093 ERC20 revert data.
pub fn parse_error(data: &[u8]) -> Option<String> {
    let message = match IERC20ErrorsErrors::abi_decode(data).ok()? {
        IERC20ErrorsErrors::ERC20InsufficientBalance(e) => format!(
            "ERC20InsufficientBalance: balance {}, required: {}",
            e.balance, e.needed
        ),
        IERC20ErrorsErrors::ERC20InvalidSender(e) => format!("ERC20InvalidSender: {}", e.sender),
        IERC20ErrorsErrors::ERC20InvalidReceiver(e) => {
            format!("ERC20InvalidReceiver: {}", e.receiver)
        }
        IERC20ErrorsErrors::ERC20InsufficientAllowance(e) => format!(
            "ERC20InsufficientAllowance: {}, allowance {}, required: {}",
            e.spender, e.allowance, e.needed
        ),
        IERC20ErrorsErrors::ERC20InvalidApprover(e) => {
            format!("ERC20InvalidApprover: {}", e.approver)
        }
        IERC20ErrorsErrors::ERC20InvalidSpender(e) => format!("ERC20InvalidSpender: {}", e.spender),
    };
    Some(message)
}

/// Interactions with one ERC20 contract.
#[derive(Debug, Clone)]
pub struct Erc20Interactions {
    base: Interactions,
    session: Session,
}

impl Erc20Interactions {
    /// Bind to the token at `address` once it is known to expose `signatures`.
    pub async fn new(
        base: Interactions,
        address: Address,
        signatures: &[Erc20Signature],
    ) -> InteractionResult<Self> {
        base.check_signatures(address, signatures).await?;

        let session = base.session_with(
            address,
            CallOpts {
                from: base.address(),
                pending: true,
            },
        );

        tracing::debug!(token = %address, "ERC20 interactions ready");
        Ok(Self { base, session })
    }

    /// Use fixed transaction options for this token.
    pub fn with_tx_opts(mut self, opts: TxOpts) -> Self {
        self.base = self.base.with_tx_opts(opts);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Token balance of the signer.
    pub async fn get_balance(&self) -> InteractionResult<U256> {
        self.balance_of(self.base.address()).await
    }

    pub async fn balance_of(&self, owner: Address) -> InteractionResult<U256> {
        call(&self.session, &IERC20::balanceOfCall { account: owner })
            .await
            .map_err(|e| CALL_ERRORS.wrap("balanceOf()", e))
    }

    /// Transfer `amount` tokens from the signer to `to`.
    pub async fn transfer_to(&self, to: Address, amount: U256) -> InteractionResult<TxHash> {
        let call = IERC20::transferCall { to, value: amount };
        transact(&self.base, &self.session, &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("transfer()", e))
    }

    /// Transfer `amount` tokens from `from` to `to` using the signer's allowance.
    pub async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> InteractionResult<TxHash> {
        let call = IERC20::transferFromCall {
            from,
            to,
            value: amount,
        };
        transact(&self.base, &self.session, &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("transferFrom()", e))
    }

    pub async fn approve(&self, spender: Address, allowance: U256) -> InteractionResult<TxHash> {
        let call = IERC20::approveCall {
            spender,
            value: allowance,
        };
        transact(&self.base, &self.session, &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("approve()", e))
    }

    /// Amount `spender` may still spend on behalf of `owner`.
    pub async fn allowance(&self, owner: Address, spender: Address) -> InteractionResult<U256> {
        call(&self.session, &IERC20::allowanceCall { owner, spender })
            .await
            .map_err(|e| CALL_ERRORS.wrap("allowance()", e))
    }

    pub async fn decimals(&self) -> InteractionResult<u8> {
        call(&self.session, &IERC20::decimalsCall {})
            .await
            .map_err(|e| CALL_ERRORS.wrap("decimals()", e))
    }

    pub async fn total_supply(&self) -> InteractionResult<U256> {
        call(&self.session, &IERC20::totalSupplyCall {})
            .await
            .map_err(|e| CALL_ERRORS.wrap("totalSupply()", e))
    }

    pub async fn name(&self) -> InteractionResult<String> {
        call(&self.session, &IERC20::nameCall {})
            .await
            .map_err(|e| CALL_ERRORS.wrap("name()", e))
    }

    pub async fn symbol(&self) -> InteractionResult<String> {
        call(&self.session, &IERC20::symbolCall {})
            .await
            .map_err(|e| CALL_ERRORS.wrap("symbol()", e))
    }

    /// Name and symbol of the token.
    pub async fn token_meta_infos(&self) -> InteractionResult<TokenMeta> {
        let name = self.name().await?;
        let symbol = self.symbol().await?;
        Ok(TokenMeta {
            name,
            symbol,
            uri: None,
        })
    }
}

impl ContractImplementation for Erc20Interactions {
    fn address(&self) -> Address {
        self.session.address()
    }

    fn interactions(&self) -> &Interactions {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::IERC20Errors;
    use alloy::sol_types::SolError;

    #[test]
    fn test_parse_insufficient_balance() {
        let data = IERC20Errors::ERC20InsufficientBalance {
            sender: Address::ZERO,
            balance: U256::ZERO,
            needed: U256::from(1),
        }
        .abi_encode();
        assert_eq!(
            parse_error(&data).as_deref(),
            Some("ERC20InsufficientBalance: balance 0, required: 1")
        );
    }

    #[test]
    fn test_parse_unknown_error() {
        assert!(parse_error(&[0xde, 0xad, 0xbe, 0xef]).is_none());
        assert!(parse_error(&[]).is_none());
    }

    #[test]
    fn test_wrap_labels_method() {
        let data = IERC20Errors::ERC20InvalidSpender {
            spender: Address::ZERO,
        }
        .abi_encode();
        assert_eq!(
            CALL_ERRORS.describe(&data),
            format!("ERC20InvalidSpender: {}", Address::ZERO)
        );
    }
}
