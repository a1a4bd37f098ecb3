//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision.
///
/// Most tokens use 18 decimals; the notable exceptions this crate touches
/// are USDC/USDT (6) and WBTC (8). The bridge indexer additionally
/// serializes every teleport amount in 18-decimal wire precision regardless
/// of the asset's declared decimals; see
/// [`WIRE_DECIMALS`](crate::estimator::WIRE_DECIMALS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// USDT decimals (6)
    pub const USDT: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// DAI decimals (18)
    pub const DAI: Self = Self(18);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Calculate the divisor for normalization: 10^decimals
    pub fn divisor(&self) -> f64 {
        10_f64.powi(self.0 as i32)
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
