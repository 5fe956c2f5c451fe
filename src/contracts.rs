//! Solidity bindings for the supported token standards.
//!
//! Calls are packed and unpacked through the generated `SolCall` types; the
//! error interfaces are used to decode revert data.

use alloy::sol;

sol! {
    /// ERC20 token standard with metadata.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address to, uint256 value) external returns (bool);
        function approve(address spender, uint256 value) external returns (bool);
        function transferFrom(address from, address to, uint256 value) external returns (bool);
    }

    /// ERC20 burnable extension.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20Burnable {
        function burn(uint256 value) external;
        function burnFrom(address account, uint256 value) external;
    }

    /// ERC-6093 ERC20 custom errors.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20Errors {
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidSender(address sender);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
        error ERC20InvalidApprover(address approver);
        error ERC20InvalidSpender(address spender);
    }

    /// ERC721 token standard with metadata.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC721 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function tokenURI(uint256 tokenId) external view returns (string);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function getApproved(uint256 tokenId) external view returns (address);
        function isApprovedForAll(address owner, address operator) external view returns (bool);
        function approve(address to, uint256 tokenId) external;
        function setApprovalForAll(address operator, bool approved) external;
        function transferFrom(address from, address to, uint256 tokenId) external;
        function safeTransferFrom(address from, address to, uint256 tokenId) external;
    }

    /// ERC721 enumerable extension.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC721Enumerable {
        function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256);
        function tokenByIndex(uint256 index) external view returns (uint256);
    }

    /// ERC2981 royalty standard.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC2981 {
        function royaltyInfo(uint256 tokenId, uint256 salePrice) external view returns (address receiver, uint256 royaltyAmount);
    }

    /// ERC-6093 ERC721 custom errors together with the ERC721A ones.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC721Errors {
        error ERC721InvalidOwner(address owner);
        error ERC721NonexistentToken(uint256 tokenId);
        error ERC721IncorrectOwner(address sender, uint256 tokenId, address owner);
        error ERC721InvalidSender(address sender);
        error ERC721InvalidReceiver(address receiver);
        error ERC721InsufficientApproval(address operator, uint256 tokenId);
        error ERC721InvalidApprover(address approver);
        error ERC721InvalidOperator(address operator);
        error ApprovalCallerNotOwnerNorApproved();
        error ApprovalQueryForNonexistentToken();
        error BalanceQueryForZeroAddress();
        error OwnerQueryForNonexistentToken();
        error TransferCallerNotOwnerNorApproved();
        error TransferFromIncorrectOwner();
        error TransferToNonERC721ReceiverImplementer();
        error TransferToZeroAddress();
        error URIQueryForNonexistentToken();
    }

    /// Disperse contract for multi-recipient transfers.
    #[derive(Debug, PartialEq, Eq)]
    interface IDisperse {
        function disperseEther(address[] recipients, uint256[] values) external payable;
        function disperseToken(address token, address[] recipients, uint256[] values) external;
        function disperseTokenSimple(address token, address[] recipients, uint256[] values) external;
    }

    /// EIP-2535 diamond loupe, used to locate facets.
    #[derive(Debug, PartialEq, Eq)]
    interface IDiamondLoupe {
        function facetAddress(bytes4 functionSelector) external view returns (address facetAddress_);
    }
}
