//! ERC2981 royalties.

use alloy::primitives::{Address, U256};

use crate::base::transaction::call;
use crate::base::{InteractionError, InteractionResult, Interactions, InterfacingError};
use crate::contracts::IERC2981;
use crate::extension::ContractImplementation;
use crate::models::RoyaltyInfo;
use crate::nft::signatures::RoyaltiesSignature;
use crate::nft::{Erc721Interactions, CALL_ERRORS};

/// ERC721 interactions of a collection that reports royalties.
#[derive(Debug, Clone)]
pub struct Erc721RoyaltiesInteractions {
    nft: Erc721Interactions,
}

impl Erc721RoyaltiesInteractions {
    pub async fn new(
        nft: Erc721Interactions,
        signatures: &[RoyaltiesSignature],
    ) -> InteractionResult<Self> {
        nft.interactions()
            .check_signatures(nft.address(), signatures)
            .await
            .map_err(|e| InterfacingError::new("ierc721Royalties", InteractionError::from(e)))?;

        Ok(Self { nft })
    }

    pub fn nft(&self) -> &Erc721Interactions {
        &self.nft
    }

    /// Royalty receiver and amount owed for selling `token_id` at `sale_price`.
    pub async fn royalties_infos(
        &self,
        token_id: U256,
        sale_price: U256,
    ) -> InteractionResult<RoyaltyInfo> {
        let call_data = IERC2981::royaltyInfoCall {
            tokenId: token_id,
            salePrice: sale_price,
        };
        let infos = call(self.nft.session(), &call_data)
            .await
            .map_err(|e| CALL_ERRORS.wrap("royaltyInfo()", e))?;

        Ok(RoyaltyInfo {
            receiver: infos.receiver,
            royalty_amount: infos.royaltyAmount,
        })
    }
}

impl ContractImplementation for Erc721RoyaltiesInteractions {
    fn address(&self) -> Address {
        self.nft.address()
    }

    fn interactions(&self) -> &Interactions {
        self.nft.interactions()
    }
}
