//! Ether/wei conversions for human-readable amounts.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;

use crate::base::types::{InteractionError, InteractionResult};

/// Convert a wei amount to ether as a float. Lossy, meant for display.
pub fn to_ether(wei: U256) -> f64 {
    format_ether(wei).parse().unwrap_or(f64::INFINITY)
}

/// Convert an ether amount to wei. Precision is kept down to the gwei.
pub fn ether_to_wei(amount: f64) -> InteractionResult<U256> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(InteractionError::InvalidAmount(amount.to_string()));
    }
    parse_ether(&format!("{amount:.9}"))
        .map_err(|e| InteractionError::InvalidAmount(format!("{amount}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ether() {
        assert_eq!(to_ether(U256::from(1_500_000_000_000_000_000u128)), 1.5);
        assert_eq!(to_ether(U256::ZERO), 0.0);
    }

    #[test]
    fn test_ether_to_wei() {
        assert_eq!(ether_to_wei(1.0).unwrap(), U256::from(1_000_000_000_000_000_000u128));
        assert_eq!(ether_to_wei(0.25).unwrap(), U256::from(250_000_000_000_000_000u128));
        assert_eq!(ether_to_wei(0.1).unwrap(), U256::from(100_000_000_000_000_000u128));
        assert!(ether_to_wei(-1.0).is_err());
        assert!(ether_to_wei(f64::NAN).is_err());
    }
}
