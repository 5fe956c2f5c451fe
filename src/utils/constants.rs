//! Well-known identifiers and sizes.

use alloy::primitives::{b256, FixedBytes, B256};

/// ERC165 interface id of ERC721.
pub const IERC721_INTERFACE_ID: FixedBytes<4> = FixedBytes([0x80, 0xac, 0x58, 0xcd]);

/// ERC165 interface id of ERC20.
pub const IERC20_INTERFACE_ID: FixedBytes<4> = FixedBytes([0x36, 0x37, 0x2b, 0x07]);

/// ERC165 interface id of ERC1155.
pub const IERC1155_INTERFACE_ID: FixedBytes<4> = FixedBytes([0xd9, 0xb6, 0x7a, 0x26]);

/// Length of a custom error selector in revert data.
pub const ERROR_SELECTOR_LENGTH: usize = 4;

/// EIP-1967 storage slot holding the implementation address of a proxy.
pub const EIP1967_IMPLEMENTATION_SLOT: B256 =
    b256!("360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");
