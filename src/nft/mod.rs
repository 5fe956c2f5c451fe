//! ERC721 token interactions.

pub mod enumerable;
pub mod merged;
pub mod royalties;
pub mod signatures;

use alloy::primitives::{Address, TxHash, U256};
use alloy::sol_types::SolInterface;

use crate::base::call_errors::CallErrorBuilder;
use crate::base::transaction::{call, transact};
use crate::base::{
    CallOpts, InteractionError, InteractionResult, Interactions, InterfacingError, Session, TxOpts,
};
use crate::contracts::IERC721;
use crate::contracts::IERC721Errors::IERC721ErrorsErrors;
use crate::extension::{simulate_call, ContractImplementation};
use crate::models::TokenMeta;

pub use enumerable::Erc721EnumerableInteractions;
pub use merged::{AllInfos, Erc721SummedInteractions, Extension};
pub use royalties::Erc721RoyaltiesInteractions;
pub use signatures::{EnumerableSignature, NftSignature, RoyaltiesSignature};

pub(crate) const CALL_ERRORS: CallErrorBuilder = CallErrorBuilder::new("nft", parse_error);

/// Revert reason that stops [`Erc721Interactions::transfer_first_owned_to`].
const ZERO_ADDRESS_ERROR: &str = "TransferToZeroAddress";

const NAME_ABI: &str = r#"[{
    "type": "function",
    "name": "name",
    "inputs": [],
    "outputs": [{"name": "", "type": "string"}],
    "stateMutability": "view"
}]"#;

/// Readable message for ERC-6093 and ERC721A revert data.
pub fn parse_error(data: &[u8]) -> Option<String> {
    use IERC721ErrorsErrors as E;

    let message = match E::abi_decode(data).ok()? {
        E::ERC721InvalidOwner(e) => format!("ERC721InvalidOwner: {}", e.owner),
        E::ERC721NonexistentToken(e) => format!("ERC721NonexistentToken: {}", e.tokenId),
        E::ERC721IncorrectOwner(e) => format!(
            "ERC721IncorrectOwner: sender {}, token {}, owner {}",
            e.sender, e.tokenId, e.owner
        ),
        E::ERC721InvalidSender(e) => format!("ERC721InvalidSender: {}", e.sender),
        E::ERC721InvalidReceiver(e) => format!("ERC721InvalidReceiver: {}", e.receiver),
        E::ERC721InsufficientApproval(e) => format!(
            "ERC721InsufficientApproval: operator {}, token {}",
            e.operator, e.tokenId
        ),
        E::ERC721InvalidApprover(e) => format!("ERC721InvalidApprover: {}", e.approver),
        E::ERC721InvalidOperator(e) => format!("ERC721InvalidOperator: {}", e.operator),
        E::ApprovalCallerNotOwnerNorApproved(_) => "ApprovalCallerNotOwnerNorApproved".into(),
        E::ApprovalQueryForNonexistentToken(_) => "ApprovalQueryForNonexistentToken".into(),
        E::BalanceQueryForZeroAddress(_) => "BalanceQueryForZeroAddress".into(),
        E::OwnerQueryForNonexistentToken(_) => "OwnerQueryForNonexistentToken".into(),
        E::TransferCallerNotOwnerNorApproved(_) => "TransferCallerNotOwnerNorApproved".into(),
        E::TransferFromIncorrectOwner(_) => "TransferFromIncorrectOwner".into(),
        E::TransferToNonERC721ReceiverImplementer(_) => {
            "TransferToNonERC721ReceiverImplementer".into()
        }
        E::TransferToZeroAddress(_) => ZERO_ADDRESS_ERROR.into(),
        E::URIQueryForNonexistentToken(_) => "URIQueryForNonexistentToken".into(),
    };
    Some(message)
}

/// Interactions with one ERC721 contract.
#[derive(Debug, Clone)]
pub struct Erc721Interactions {
    base: Interactions,
    session: Session,
}

impl Erc721Interactions {
    /// Bind to the collection at `address`.
    ///
    /// The contract must expose `signatures` and answer a simulated `name()`.
    pub async fn new(
        base: Interactions,
        address: Address,
        signatures: &[NftSignature],
    ) -> InteractionResult<Self> {
        base.check_signatures(address, signatures).await?;

        let session = base.session_with(
            address,
            CallOpts {
                from: base.address(),
                pending: true,
            },
        );
        let nft = Self { base, session };

        simulate_call(&nft, NAME_ABI, "name", &[])
            .await
            .map_err(|e| InterfacingError::new("NewERC721Interactions", e))?;

        tracing::debug!(collection = %address, "ERC721 interactions ready");
        Ok(nft)
    }

    /// Use fixed transaction options for this collection.
    pub fn with_tx_opts(mut self, opts: TxOpts) -> Self {
        self.base = self.base.with_tx_opts(opts);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of tokens held by the signer.
    pub async fn get_balance(&self) -> InteractionResult<U256> {
        self.balance_of(self.base.address()).await
    }

    pub async fn balance_of(&self, owner: Address) -> InteractionResult<U256> {
        call(&self.session, &IERC721::balanceOfCall { owner })
            .await
            .map_err(|e| CALL_ERRORS.wrap("balanceOf()", e))
    }

    pub async fn owner_of(&self, token_id: U256) -> InteractionResult<Address> {
        call(&self.session, &IERC721::ownerOfCall { tokenId: token_id })
            .await
            .map_err(|e| CALL_ERRORS.wrap("ownerOf()", e))
    }

    /// Transfer `token_id` from the signer to `to`.
    pub async fn transfer_to(&self, to: Address, token_id: U256) -> InteractionResult<TxHash> {
        let call = IERC721::transferFromCall {
            from: self.base.address(),
            to,
            tokenId: token_id,
        };
        transact(&self.base, &self.session, &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("transferFrom()", e))
    }

    /// Transfer `token_id` from the signer to `to`, checking that a contract receiver accepts it.
    pub async fn safe_transfer_to(&self, to: Address, token_id: U256) -> InteractionResult<TxHash> {
        let call = IERC721::safeTransferFromCall {
            from: self.base.address(),
            to,
            tokenId: token_id,
        };
        transact(&self.base, &self.session, &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("safeTransferFrom()", e))
    }

    /// Transfer the first token id in `0..totalSupply` the signer is able to send.
    ///
    /// Stops at the first `TransferToZeroAddress` revert since no other id can succeed.
    pub async fn transfer_first_owned_to(&self, to: Address) -> InteractionResult<TxHash> {
        let supply = self.total_supply().await?;
        let supply = u64::try_from(supply).unwrap_or(u64::MAX);

        for id in 0..supply {
            match self.transfer_to(to, U256::from(id)).await {
                Ok(tx_hash) => return Ok(tx_hash),
                Err(e) if e.to_string().contains(ZERO_ADDRESS_ERROR) => return Err(e),
                Err(e) => {
                    tracing::trace!(token_id = id, error = %e, "Token not transferable");
                }
            }
        }

        Err(InteractionError::NoOwnedToken)
    }

    pub async fn approve(&self, to: Address, token_id: U256) -> InteractionResult<TxHash> {
        let call = IERC721::approveCall {
            to,
            tokenId: token_id,
        };
        transact(&self.base, &self.session, &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("approve()", e))
    }

    pub async fn get_approved(&self, token_id: U256) -> InteractionResult<Address> {
        call(&self.session, &IERC721::getApprovedCall { tokenId: token_id })
            .await
            .map_err(|e| CALL_ERRORS.wrap("getApproved()", e))
    }

    /// Allow or revoke `operator` for every token of the signer.
    pub async fn set_approval_for_all(
        &self,
        operator: Address,
        approved: bool,
    ) -> InteractionResult<TxHash> {
        let call = IERC721::setApprovalForAllCall { operator, approved };
        transact(&self.base, &self.session, &call, U256::ZERO)
            .await
            .map_err(|e| CALL_ERRORS.wrap("setApprovalForAll()", e))
    }

    pub async fn is_approved_for_all(
        &self,
        owner: Address,
        operator: Address,
    ) -> InteractionResult<bool> {
        call(&self.session, &IERC721::isApprovedForAllCall { owner, operator })
            .await
            .map_err(|e| CALL_ERRORS.wrap("isApprovedForAll()", e))
    }

    pub async fn total_supply(&self) -> InteractionResult<U256> {
        call(&self.session, &IERC721::totalSupplyCall {})
            .await
            .map_err(|e| CALL_ERRORS.wrap("totalSupply()", e))
    }

    pub async fn name(&self) -> InteractionResult<String> {
        call(&self.session, &IERC721::nameCall {})
            .await
            .map_err(|e| CALL_ERRORS.wrap("name()", e))
    }

    pub async fn symbol(&self) -> InteractionResult<String> {
        call(&self.session, &IERC721::symbolCall {})
            .await
            .map_err(|e| CALL_ERRORS.wrap("symbol()", e))
    }

    pub async fn token_uri(&self, token_id: U256) -> InteractionResult<String> {
        call(&self.session, &IERC721::tokenURICall { tokenId: token_id })
            .await
            .map_err(|e| CALL_ERRORS.wrap("tokenURI()", e))
    }

    /// Name, symbol and URI of `token_id`.
    pub async fn token_meta_infos(&self, token_id: U256) -> InteractionResult<TokenMeta> {
        let name = self.name().await?;
        let symbol = self.symbol().await?;
        let uri = self.token_uri(token_id).await?;
        Ok(TokenMeta {
            name,
            symbol,
            uri: Some(uri),
        })
    }
}

impl ContractImplementation for Erc721Interactions {
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
    use crate::contracts::IERC721Errors;
    use alloy::sol_types::SolError;

    #[test]
    fn test_parse_erc721a_errors() {
        let data = IERC721Errors::TransferToZeroAddress {}.abi_encode();
        assert_eq!(parse_error(&data).as_deref(), Some("TransferToZeroAddress"));

        let data = IERC721Errors::OwnerQueryForNonexistentToken {}.abi_encode();
        assert_eq!(
            parse_error(&data).as_deref(),
            Some("OwnerQueryForNonexistentToken")
        );
    }

    #[test]
    fn test_parse_erc6093_errors() {
        let data = IERC721Errors::ERC721NonexistentToken {
            tokenId: U256::from(7),
        }
        .abi_encode();
        assert_eq!(
            parse_error(&data).as_deref(),
            Some("ERC721NonexistentToken: 7")
        );
    }

    #[test]
    fn test_zero_address_message_is_detectable() {
        let data = IERC721Errors::TransferToZeroAddress {}.abi_encode();
        let message = CALL_ERRORS.describe(&data);
        assert!(message.contains(ZERO_ADDRESS_ERROR));
    }
}
