//! Function signatures and their 4-byte selectors.

use std::fmt;

use alloy::hex;
use alloy::primitives::{keccak256, Selector};

/// A Solidity function signature such as `balanceOf(address)`.
pub trait Signature {
    /// Canonical text signature.
    fn text(&self) -> &str;

    /// First four bytes of the keccak256 hash of the text signature.
    fn selector(&self) -> Selector {
        Selector::from_slice(&keccak256(self.text().as_bytes())[..4])
    }

    /// Lowercase hex of the selector, without `0x`.
    fn hex(&self) -> String {
        hex::encode(self.selector())
    }
}

impl<T: Signature + ?Sized> Signature for &T {
    fn text(&self) -> &str {
        (**self).text()
    }
}

/// Signature not covered by one of the typed sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawSignature(pub String);

impl Signature for RawSignature {
    fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawSignature {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Declares a typed set of signatures backed by their text form.
macro_rules! signature_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every signature of the set.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::signatures::Signature for $name {
            fn text(&self) -> &str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::signatures::Signature::text(self))
            }
        }
    };
}

pub(crate) use signature_set;
