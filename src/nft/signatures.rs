use crate::signatures::signature_set;

signature_set! {
    /// Functions of a base ERC721 token.
    NftSignature {
        Name => "name()",
        Symbol => "symbol()",
        BalanceOf => "balanceOf(address)",
        TotalSupply => "totalSupply()",
        OwnerOf => "ownerOf(uint256)",
        TokenUri => "tokenURI(uint256)",
        Approve => "approve(address,uint256)",
        GetApproved => "getApproved(uint256)",
        SetApprovalForAll => "setApprovalForAll(address,bool)",
        IsApprovedForAll => "isApprovedForAll(address,address)",
        TransferFrom => "transferFrom(address,address,uint256)",
        SafeTransferFrom => "safeTransferFrom(address,address,uint256)",
    }
}

signature_set! {
    /// Functions of the ERC721 enumerable extension.
    EnumerableSignature {
        TokenOfOwnerByIndex => "tokenOfOwnerByIndex(address,uint256)",
        TokenByIndex => "tokenByIndex(uint256)",
    }
}

signature_set! {
    /// ERC2981 royalty lookup.
    RoyaltiesSignature {
        RoyaltyInfo => "royaltyInfo(uint256,uint256)",
    }
}
