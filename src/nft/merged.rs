//! ERC721 collection with any combination of the supported extensions.

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::base::{InteractionResult, Interactions};
use crate::extension::ContractImplementation;
use crate::models::{RoyaltyInfo, TokenMeta};
use crate::nft::enumerable::Erc721EnumerableInteractions;
use crate::nft::royalties::Erc721RoyaltiesInteractions;
use crate::nft::signatures::{EnumerableSignature, RoyaltiesSignature};
use crate::nft::Erc721Interactions;
use crate::signatures::Signature;

/// Optional ERC721 extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Enumerable,
    Royalties,
}

/// Everything known about a collection and one of its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllInfos {
    pub meta: TokenMeta,
    pub total_supply: U256,
    /// Royalty for the sale price given to [`Erc721SummedInteractions::all_infos`],
    /// when the royalties extension is enabled.
    pub royalties: Option<RoyaltyInfo>,
}

#[derive(Debug, Clone)]
pub struct Erc721SummedInteractions {
    nft: Erc721Interactions,
    enumerable: Option<Erc721EnumerableInteractions>,
    royalties: Option<Erc721RoyaltiesInteractions>,
}

impl Erc721SummedInteractions {
    /// Check `signatures`, then enable every extension in `extensions`.
    pub async fn new<S: Signature>(
        nft: Erc721Interactions,
        signatures: &[S],
        extensions: &[Extension],
    ) -> InteractionResult<Self> {
        nft.interactions()
            .check_signatures(nft.address(), signatures)
            .await?;

        let mut enumerable = None;
        let mut royalties = None;
        for extension in extensions {
            match extension {
                Extension::Enumerable => {
                    enumerable = Some(
                        Erc721EnumerableInteractions::new(nft.clone(), EnumerableSignature::ALL)
                            .await?,
                    );
                }
                Extension::Royalties => {
                    royalties = Some(
                        Erc721RoyaltiesInteractions::new(nft.clone(), RoyaltiesSignature::ALL)
                            .await?,
                    );
                }
            }
        }

        Ok(Self {
            nft,
            enumerable,
            royalties,
        })
    }

    pub fn nft(&self) -> &Erc721Interactions {
        &self.nft
    }

    pub fn enumerable(&self) -> Option<&Erc721EnumerableInteractions> {
        self.enumerable.as_ref()
    }

    pub fn royalties(&self) -> Option<&Erc721RoyaltiesInteractions> {
        self.royalties.as_ref()
    }

    /// Meta infos and supply, plus royalties when enabled.
    ///
    /// `token_id` defaults to 0 and `sale_price` to 1 wei.
    pub async fn all_infos(
        &self,
        token_id: Option<U256>,
        sale_price: Option<U256>,
    ) -> InteractionResult<AllInfos> {
        let token_id = token_id.unwrap_or(U256::ZERO);
        let sale_price = sale_price.unwrap_or(U256::from(1));

        let meta = self.nft.token_meta_infos(token_id).await?;
        let total_supply = self.nft.total_supply().await?;
        let royalties = match &self.royalties {
            Some(royalties) => Some(
                royalties
                    .royalties_infos(token_id, sale_price)
                    .await?,
            ),
            None => None,
        };

        Ok(AllInfos {
            meta,
            total_supply,
            royalties,
        })
    }
}

impl ContractImplementation for Erc721SummedInteractions {
    fn address(&self) -> Address {
        self.nft.address()
    }

    fn interactions(&self) -> &Interactions {
        self.nft.interactions()
    }
}
