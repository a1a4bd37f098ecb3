// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-chain USD estimation from a network-wide bridge snapshot.
//!
//! Three strategies, applied in priority order, first success wins:
//!
//! 1. **Direct teleport involvement**: sum the wire-normalized amounts of
//!    every event whose source or destination chain is the target. Used when
//!    the sum clears the configured threshold.
//! 2. **Proportional distribution**: the chain's share of cumulative
//!    inbound transfer volume, applied to the total teleported value across
//!    all assets. Used when above the configured floor.
//! 3. **Fall through**: [`EstimateOutcome::InsufficientData`]; the caller
//!    delegates to the on-chain fallback prober.
//!
//! Stats and events referencing unregistered ids are excluded from every
//! sum. All arithmetic is `f64`; truncation happens only at allocation time.

use alloy_chains::NamedChain;
use tracing::debug;

use crate::config::AdapterConfig;
use crate::types::{BridgeSnapshot, ChainProportion, NormalizedAmount, TokenDecimals, UsdValue};

/// Precision the indexer serializes every teleport amount in.
///
/// This is uniform 18-decimal fixed point for all assets, including the
/// 6-decimal stablecoins. The wire format does not carry per-asset
/// decimals, and the per-chain volume counters use the same precision, so
/// the estimator normalizes with this constant everywhere. Whether amounts
/// should instead be normalized by each asset's declared decimals is an
/// open question tracked in DESIGN.md.
pub const WIRE_DECIMALS: TokenDecimals = TokenDecimals::STANDARD;

/// Which strategy produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Sum of teleport events directly involving the chain
    DirectInvolvement,
    /// Chain's volume share applied to total teleported value
    ProportionalShare,
}

/// Result of one estimation attempt.
///
/// The historical implementation expressed the last two cases as a logged
/// catch-all; they are explicit variants here so the fallback decision is a
/// visible branch in the adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimateOutcome {
    /// A usable USD estimate
    Estimate {
        /// Estimated USD value attributable to the chain
        value: UsdValue,
        /// Strategy that produced it
        strategy: Strategy,
    },
    /// Snapshot data was present but yielded nothing above the floors
    InsufficientData,
    /// The snapshot fetch itself failed
    TransportError,
}

/// Sum of wire-normalized amounts of registered events involving `chain`.
///
/// Order-independent: the result is the same for any permutation of the
/// event list.
pub fn direct_involvement_sum(snapshot: &BridgeSnapshot, chain: NamedChain) -> NormalizedAmount {
    snapshot
        .events_involving(chain)
        .map(|e| e.amount.normalize(WIRE_DECIMALS))
        .sum()
}

/// Total wire-normalized teleported value across all registered events
pub fn total_teleport_value(snapshot: &BridgeSnapshot) -> NormalizedAmount {
    snapshot
        .registered_events()
        .map(|e| e.amount.normalize(WIRE_DECIMALS))
        .sum()
}

/// Proportional estimate for `chain`, if the snapshot supports one.
///
/// Returns `None` when the chain has no registered stat record or the
/// network-wide volume is zero (no division happens in that case).
pub fn proportional_estimate(snapshot: &BridgeSnapshot, chain: NamedChain) -> Option<UsdValue> {
    let stat = snapshot.stat_for(chain)?;
    let chain_volume = stat.total_transfers_in.normalize(WIRE_DECIMALS);
    let network_volume: NormalizedAmount = snapshot
        .chain_stats
        .iter()
        .filter(|s| s.chain().is_some())
        .map(|s| s.total_transfers_in.normalize(WIRE_DECIMALS))
        .sum();

    let share = ChainProportion::of(chain_volume.as_f64(), network_volume.as_f64())?;
    let total_value = total_teleport_value(snapshot);
    Some(UsdValue::new(share.as_f64() * total_value.as_f64()))
}

/// Turns snapshots into per-chain USD estimates according to an
/// [`AdapterConfig`] strategy table.
#[derive(Debug, Clone)]
pub struct Estimator {
    config: AdapterConfig,
}

impl Estimator {
    /// Create an estimator with the given strategy table
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    /// The strategy table in use
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Estimate the USD value attributable to `chain`.
    pub fn estimate(&self, snapshot: &BridgeSnapshot, chain: NamedChain) -> EstimateOutcome {
        let direct = direct_involvement_sum(snapshot, chain);
        let clears_threshold = match self.config.min_direct_threshold {
            Some(threshold) => direct.as_f64() > threshold.as_f64(),
            None => !direct.is_zero(),
        };
        if clears_threshold {
            debug!(%chain, value = direct.as_f64(), "Using direct teleport involvement");
            return EstimateOutcome::Estimate {
                value: UsdValue::new(direct.as_f64()),
                strategy: Strategy::DirectInvolvement,
            };
        }

        if let Some(value) = proportional_estimate(snapshot, chain) {
            if value.as_f64() > self.config.min_proportional_floor.as_f64() {
                debug!(%chain, value = value.as_f64(), "Using proportional volume share");
                return EstimateOutcome::Estimate {
                    value,
                    strategy: Strategy::ProportionalShare,
                };
            }
        }

        debug!(%chain, "No usable estimate, deferring to fallback prober");
        EstimateOutcome::InsufficientData
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChainStat, TeleportEvent, TokenAmount};
    use alloy_primitives::U256;

    const ONE: u128 = 1_000_000_000_000_000_000;

    fn stat(chain_id: u64, volume_units: u128) -> ChainStat {
        ChainStat {
            chain_id,
            total_transfers_in: TokenAmount::new(U256::from(volume_units * ONE)),
            total_fees: TokenAmount::ZERO,
            messages_sent: 0,
            messages_received: 0,
        }
    }

    fn event(asset_id: &str, units: u128, source: u64, dest: u64) -> TeleportEvent {
        TeleportEvent {
            asset_id: asset_id.to_string(),
            amount: TokenAmount::new(U256::from(units * ONE)),
            source_chain: source,
            dest_chain: dest,
        }
    }

    #[test]
    fn test_direct_sum_counts_both_directions() {
        let snapshot = BridgeSnapshot {
            chain_stats: vec![],
            teleports: vec![
                event("1", 150, 1, 42161),  // inbound to arbitrum
                event("1", 50, 42161, 10),  // outbound from arbitrum
                event("1", 500, 1, 10),     // unrelated
            ],
        };
        let sum = direct_involvement_sum(&snapshot, NamedChain::Arbitrum);
        assert_eq!(sum.as_f64(), 200.0);
    }

    #[test]
    fn test_direct_sum_excludes_unregistered() {
        let snapshot = BridgeSnapshot {
            chain_stats: vec![],
            teleports: vec![
                event("1", 150, 1, 42161),
                event("not-registered", 900, 1, 42161),
                event("1", 900, 999_999, 42161),
            ],
        };
        let sum = direct_involvement_sum(&snapshot, NamedChain::Arbitrum);
        assert_eq!(sum.as_f64(), 150.0);
    }

    #[test]
    fn test_standard_threshold_gates_direct() {
        let estimator = Estimator::new(AdapterConfig::standard());
        let snapshot = BridgeSnapshot {
            chain_stats: vec![],
            teleports: vec![event("1", 50, 1, 42161)],
        };
        // 50 < 100 threshold and no stats for a proportional estimate
        assert_eq!(
            estimator.estimate(&snapshot, NamedChain::Arbitrum),
            EstimateOutcome::InsufficientData
        );
    }

    #[test]
    fn test_legacy_accepts_any_positive_direct_sum() {
        let estimator = Estimator::new(AdapterConfig::legacy());
        let snapshot = BridgeSnapshot {
            chain_stats: vec![],
            teleports: vec![event("1", 50, 1, 42161)],
        };
        assert_eq!(
            estimator.estimate(&snapshot, NamedChain::Arbitrum),
            EstimateOutcome::Estimate {
                value: UsdValue::new(50.0),
                strategy: Strategy::DirectInvolvement,
            }
        );
    }

    #[test]
    fn test_proportional_share() {
        // arbitrum carries 1/4 of network volume; total teleported value 800
        let snapshot = BridgeSnapshot {
            chain_stats: vec![stat(42161, 100), stat(1, 300)],
            teleports: vec![event("1", 800, 1, 10)],
        };
        let value = proportional_estimate(&snapshot, NamedChain::Arbitrum).unwrap();
        assert!((value.as_f64() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_proportional_excludes_unmapped_stats() {
        let snapshot = BridgeSnapshot {
            chain_stats: vec![stat(42161, 100), stat(999_999, 900), stat(1, 100)],
            teleports: vec![event("1", 100, 1, 10)],
        };
        // unmapped chain's volume must not dilute the share: 100/200, not 100/1100
        let value = proportional_estimate(&snapshot, NamedChain::Arbitrum).unwrap();
        assert!((value.as_f64() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_network_volume_does_not_divide() {
        let snapshot = BridgeSnapshot {
            chain_stats: vec![stat(42161, 0), stat(1, 0)],
            teleports: vec![event("1", 100, 1, 10)],
        };
        assert!(proportional_estimate(&snapshot, NamedChain::Arbitrum).is_none());

        let estimator = Estimator::new(AdapterConfig::standard());
        assert_eq!(
            estimator.estimate(&snapshot, NamedChain::Arbitrum),
            EstimateOutcome::InsufficientData
        );
    }

    #[test]
    fn test_proportional_floor_falls_through() {
        // share 1/2 of a 1-unit total value = 0.5, at or below the 1.0 floor
        let snapshot = BridgeSnapshot {
            chain_stats: vec![stat(42161, 100), stat(1, 100)],
            teleports: vec![event("1", 1, 1, 10)],
        };
        let estimator = Estimator::new(AdapterConfig::standard());
        assert_eq!(
            estimator.estimate(&snapshot, NamedChain::Arbitrum),
            EstimateOutcome::InsufficientData
        );
    }

    #[test]
    fn test_direct_wins_over_proportional() {
        let snapshot = BridgeSnapshot {
            chain_stats: vec![stat(42161, 100), stat(1, 100)],
            teleports: vec![event("1", 5_000, 1, 42161)],
        };
        let estimator = Estimator::new(AdapterConfig::standard());
        match estimator.estimate(&snapshot, NamedChain::Arbitrum) {
            EstimateOutcome::Estimate { strategy, value } => {
                assert_eq!(strategy, Strategy::DirectInvolvement);
                assert_eq!(value.as_f64(), 5_000.0);
            }
            other => panic!("expected direct estimate, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_stat_falls_through_to_prober() {
        let snapshot = BridgeSnapshot {
            chain_stats: vec![stat(1, 100)],
            teleports: vec![event("1", 10, 1, 10)],
        };
        let estimator = Estimator::new(AdapterConfig::standard());
        assert_eq!(
            estimator.estimate(&snapshot, NamedChain::Arbitrum),
            EstimateOutcome::InsufficientData
        );
    }
}
