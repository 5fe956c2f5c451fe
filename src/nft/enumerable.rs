//! ERC721 enumerable extension.

use alloy::primitives::{Address, U256};

use crate::base::transaction::call;
use crate::base::{InteractionError, InteractionResult, Interactions, InterfacingError};
use crate::contracts::IERC721Enumerable;
use crate::extension::ContractImplementation;
use crate::nft::signatures::EnumerableSignature;
use crate::nft::{Erc721Interactions, CALL_ERRORS};

/// ERC721 interactions of a collection that can list its tokens.
#[derive(Debug, Clone)]
pub struct Erc721EnumerableInteractions {
    nft: Erc721Interactions,
}

impl Erc721EnumerableInteractions {
    pub async fn new(
        nft: Erc721Interactions,
        signatures: &[EnumerableSignature],
    ) -> InteractionResult<Self> {
        nft.interactions()
            .check_signatures(nft.address(), signatures)
            .await
            .map_err(|e| InterfacingError::new("erc721Enumerable", InteractionError::from(e)))?;

        Ok(Self { nft })
    }

    /// Base ERC721 operations of the collection.
    pub fn nft(&self) -> &Erc721Interactions {
        &self.nft
    }

    /// Token id at `index` of the tokens held by `owner`.
    pub async fn token_of_owner_by_index(
        &self,
        owner: Address,
        index: U256,
    ) -> InteractionResult<U256> {
        let call_data = IERC721Enumerable::tokenOfOwnerByIndexCall { owner, index };
        call(self.nft.session(), &call_data)
            .await
            .map_err(|e| CALL_ERRORS.wrap("tokenOfOwnerByIndex()", e))
    }

    /// Token id at `index` of every minted token.
    pub async fn token_by_index(&self, index: U256) -> InteractionResult<U256> {
        call(
            self.nft.session(),
            &IERC721Enumerable::tokenByIndexCall { index },
        )
        .await
        .map_err(|e| CALL_ERRORS.wrap("tokenByIndex()", e))
    }

    /// Every token id held by `owner`.
    pub async fn get_address_owned_tokens(&self, owner: Address) -> InteractionResult<Vec<U256>> {
        let balance = self.nft.balance_of(owner).await?;
        let mut token_ids = Vec::new();

        let mut index = U256::ZERO;
        while index < balance {
            token_ids.push(self.token_of_owner_by_index(owner, index).await?);
            index += U256::from(1);
        }
        Ok(token_ids)
    }

    /// Every minted token id.
    pub async fn get_all_token_ids(&self) -> InteractionResult<Vec<U256>> {
        let supply = self.nft.total_supply().await?;
        let mut token_ids = Vec::new();

        let mut index = U256::ZERO;
        while index < supply {
            token_ids.push(self.token_by_index(index).await?);
            index += U256::from(1);
        }
        Ok(token_ids)
    }
}

impl ContractImplementation for Erc721EnumerableInteractions {
    fn address(&self) -> Address {
        self.nft.address()
    }

    fn interactions(&self) -> &Interactions {
        self.nft.interactions()
    }
}
