// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::ops::Add;

use super::decimals::TokenDecimals;
use super::normalized::NormalizedAmount;

/// Raw token amount in the token's smallest on-chain unit.
///
/// This is the integer form that contracts store and that the aggregation
/// pipeline expects in direct balance reports (e.g. wei for ETH, 6-decimal
/// units for USDC). Use [`normalize`](Self::normalize) with the token's
/// [`TokenDecimals`] to obtain a human-readable amount.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use telescan::{TokenAmount, TokenDecimals};
///
/// // 250 USDC in 6-decimal units
/// let raw = TokenAmount::new(U256::from(250_000_000u64));
/// assert_eq!(raw.normalize(TokenDecimals::USDC).as_f64(), 250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Normalize by token decimals: amount / 10^decimals
    ///
    /// Amounts above f64's integer precision lose their low-order digits,
    /// which is acceptable for USD estimation.
    pub fn normalize(&self, decimals: TokenDecimals) -> NormalizedAmount {
        // U256 -> f64 via string; values beyond u128 would overflow a direct cast
        let amount_f64 = self.0.to_string().parse::<f64>().unwrap_or_else(|e| {
            tracing::warn!(
                amount = %self.0,
                error = %e,
                "Failed to parse token amount to f64, using 0.0"
            );
            0.0
        });

        NormalizedAmount::new(amount_f64 / decimals.divisor())
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for TokenAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
