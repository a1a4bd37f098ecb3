// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! USD value type for financial calculations

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::ops::Add;

use super::amount::TokenAmount;
use super::decimals::TokenDecimals;

/// A USD-denominated value.
///
/// Provides type safety for financial calculations, preventing confusion
/// with other f64 values like proportions or normalized token amounts.
///
/// # Examples
///
/// ```
/// use telescan::{TokenDecimals, UsdValue};
///
/// let estimate = UsdValue::new(1000.0);
/// // 70% of the estimate, expressed in raw USDC units (floor)
/// let raw = (estimate * 0.7).to_raw_units(TokenDecimals::USDC);
/// assert_eq!(raw.as_u256().to::<u64>(), 700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    /// Zero USD value
    pub const ZERO: Self = Self(0.0);

    /// Create a new USD value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// Convert to a raw integer token amount: floor(value × 10^decimals).
    ///
    /// Truncation is deliberate: the aggregation pipeline must never be
    /// handed more value than was estimated. Non-finite and negative values
    /// convert to zero.
    pub fn to_raw_units(&self, decimals: TokenDecimals) -> TokenAmount {
        let raw = (self.0 * decimals.divisor()).floor();
        if !raw.is_finite() || raw <= 0.0 {
            return TokenAmount::ZERO;
        }
        if raw >= u128::MAX as f64 {
            tracing::warn!(value = self.0, "USD value overflows raw units, saturating");
            return TokenAmount::new(U256::from(u128::MAX));
        }
        TokenAmount::new(U256::from(raw as u128))
    }

    /// Format as a USD string with the given precision
    pub fn format(&self, precision: usize) -> String {
        format!("${:.precision$}", self.0, precision = precision)
    }
}

impl From<f64> for UsdValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for UsdValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Mul<f64> for UsdValue {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
