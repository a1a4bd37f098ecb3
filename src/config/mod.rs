// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Adapter configuration
//!
//! Historically the estimator shipped as two near-identical adapters that
//! differed only in thresholds and allocation splits. Both now live behind a
//! single [`AdapterConfig`] strategy table with a named preset each:
//! [`AdapterConfig::standard`] and [`AdapterConfig::legacy`].
//!
//! # Example
//!
//! ```rust
//! use telescan::{AdapterConfig, StableSymbol, UsdValue};
//!
//! // The preset most deployments want
//! let config = AdapterConfig::standard();
//! assert_eq!(config.min_direct_threshold, Some(UsdValue::new(100.0)));
//!
//! // A custom split is validated against the 100% invariant
//! let custom = AdapterConfig::custom(
//!     vec![(StableSymbol::Usdc, 0.5), (StableSymbol::Dai, 0.5)],
//!     None,
//!     UsdValue::new(1.0),
//! )
//! .unwrap();
//! assert_eq!(custom.allocation_split.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::UsdValue;

pub mod registry;

/// Stablecoins the allocator can attribute value to, in preference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StableSymbol {
    /// USD Coin
    Usdc,
    /// Tether USD
    Usdt,
    /// Dai
    Dai,
}

impl std::fmt::Display for StableSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StableSymbol::Usdc => "USDC",
            StableSymbol::Usdt => "USDT",
            StableSymbol::Dai => "DAI",
        };
        write!(f, "{s}")
    }
}

/// Strategy table for one adapter variant.
///
/// Controls how the estimator picks a strategy and how the allocator splits
/// the resulting estimate across tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    /// Allocation shares per stablecoin, as fractions of the estimate.
    /// Tokens absent on a chain forfeit their share; it is not reallocated.
    pub allocation_split: Vec<(StableSymbol, f64)>,

    /// Minimum direct-involvement sum (USD-equivalent) for strategy 1 to
    /// win. `None` accepts any positive sum.
    pub min_direct_threshold: Option<UsdValue>,

    /// Proportional estimates at or below this floor fall through to the
    /// on-chain prober.
    pub min_proportional_floor: UsdValue,

    /// Result-count cap requested for the indexer's teleport event list
    pub max_events: usize,
}

impl AdapterConfig {
    /// Default event list cap requested from the indexer
    pub const DEFAULT_MAX_EVENTS: usize = 1000;

    /// The standard variant: 70/20/10 USDC/USDT/DAI split, 100 USD direct
    /// threshold, 1 USD proportional floor.
    pub fn standard() -> Self {
        Self {
            allocation_split: vec![
                (StableSymbol::Usdc, 0.70),
                (StableSymbol::Usdt, 0.20),
                (StableSymbol::Dai, 0.10),
            ],
            min_direct_threshold: Some(UsdValue::new(100.0)),
            min_proportional_floor: UsdValue::new(1.0),
            max_events: Self::DEFAULT_MAX_EVENTS,
        }
    }

    /// The legacy variant: single 100% USDC attribution and no direct
    /// threshold (any positive involvement sum wins).
    pub fn legacy() -> Self {
        Self {
            allocation_split: vec![(StableSymbol::Usdc, 1.0)],
            min_direct_threshold: None,
            min_proportional_floor: UsdValue::new(1.0),
            max_events: Self::DEFAULT_MAX_EVENTS,
        }
    }

    /// Build a custom configuration, enforcing that shares are positive and
    /// sum to at most 100% of the estimate.
    pub fn custom(
        allocation_split: Vec<(StableSymbol, f64)>,
        min_direct_threshold: Option<UsdValue>,
        min_proportional_floor: UsdValue,
    ) -> Result<Self, ConfigError> {
        if allocation_split.is_empty() {
            return Err(ConfigError::EmptyAllocationSplit);
        }
        if let Some(&(symbol, share)) = allocation_split
            .iter()
            .find(|(_, share)| *share <= 0.0 || !share.is_finite())
        {
            return Err(ConfigError::InvalidShare {
                symbol: symbol.to_string(),
                share,
            });
        }
        let total: f64 = allocation_split.iter().map(|(_, share)| share).sum();
        if total > 1.0 + f64::EPSILON {
            return Err(ConfigError::AllocationExceedsWhole { total });
        }
        Ok(Self {
            allocation_split,
            min_direct_threshold,
            min_proportional_floor,
            max_events: Self::DEFAULT_MAX_EVENTS,
        })
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::standard()
    }
}
