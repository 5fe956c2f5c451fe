use crate::signatures::signature_set;

signature_set! {
    /// Functions of a base ERC20 token.
    Erc20Signature {
        Name => "name()",
        Symbol => "symbol()",
        Decimals => "decimals()",
        BalanceOf => "balanceOf(address)",
        TotalSupply => "totalSupply()",
        Approve => "approve(address,uint256)",
        Allowance => "allowance(address,address)",
        Transfer => "transfer(address,uint256)",
        TransferFrom => "transferFrom(address,address,uint256)",
    }
}

signature_set! {
    /// Functions of the ERC20 burnable extension.
    Erc20BurnableSignature {
        Burn => "burn(uint256)",
        BurnFrom => "burnFrom(address,uint256)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::Signature;

    #[test]
    fn test_erc20_selectors() {
        assert_eq!(Erc20Signature::Transfer.hex(), "a9059cbb");
        assert_eq!(Erc20Signature::TotalSupply.hex(), "18160ddd");
        assert_eq!(Erc20Signature::ALL.len(), 9);
        assert_eq!(Erc20BurnableSignature::Burn.hex(), "42966c68");
        assert_eq!(Erc20BurnableSignature::BurnFrom.to_string(), "burnFrom(address,uint256)");
    }
}
