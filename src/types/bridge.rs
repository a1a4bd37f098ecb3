// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Domain records produced by the bridge indexer.
//!
//! All of these are fresh per query and immutable once parsed; nothing here
//! is cached or persisted between TVL invocations.

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};

use crate::config::registry;

use super::tokens::TokenAmount;

/// Aggregate per-chain counters reported by the indexer.
///
/// `total_transfers_in` is a cumulative fixed-point integer with 18 implied
/// decimals, regardless of which assets made up the transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStat {
    /// Numeric chain identifier as registered with the bridge
    pub chain_id: u64,
    /// Cumulative inbound transfer volume (18 implied decimals)
    pub total_transfers_in: TokenAmount,
    /// Cumulative protocol fees earned (18 implied decimals)
    pub total_fees: TokenAmount,
    /// Cross-chain messages sent from this chain
    pub messages_sent: u64,
    /// Cross-chain messages delivered to this chain
    pub messages_received: u64,
}

impl ChainStat {
    /// The chain this stat refers to, if its id is registered
    pub fn chain(&self) -> Option<NamedChain> {
        registry::chain_for_id(self.chain_id)
    }
}

/// One cross-chain transfer record emitted by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeleportEvent {
    /// Opaque asset identifier, resolved via [`registry::asset_for_id`]
    pub asset_id: String,
    /// Raw transfer amount (decimals implied by the asset on-chain, but
    /// serialized by the indexer in 18-decimal wire precision)
    pub amount: TokenAmount,
    /// Source chain identifier
    pub source_chain: u64,
    /// Destination chain identifier
    pub dest_chain: u64,
}

impl TeleportEvent {
    /// Whether the event's asset and both endpoint chains are registered.
    ///
    /// Events failing this check are excluded from every estimator sum.
    pub fn is_registered(&self) -> bool {
        registry::asset_for_id(&self.asset_id).is_some()
            && registry::chain_for_id(self.source_chain).is_some()
            && registry::chain_for_id(self.dest_chain).is_some()
    }

    /// Whether the given chain is the source or destination of this event
    pub fn involves(&self, chain: NamedChain) -> bool {
        registry::chain_for_id(self.source_chain) == Some(chain)
            || registry::chain_for_id(self.dest_chain) == Some(chain)
    }
}

/// One parsed indexer response: all chains' stats and the recent teleport
/// events, unfiltered by chain (the query has no server-side filtering).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSnapshot {
    /// Per-chain aggregate counters
    pub chain_stats: Vec<ChainStat>,
    /// Recent teleport events across the whole network
    pub teleports: Vec<TeleportEvent>,
}

impl BridgeSnapshot {
    /// The stat record for the given chain, if one is present and registered
    pub fn stat_for(&self, chain: NamedChain) -> Option<&ChainStat> {
        self.chain_stats.iter().find(|s| s.chain() == Some(chain))
    }

    /// Registered teleport events that touch the given chain
    pub fn events_involving(&self, chain: NamedChain) -> impl Iterator<Item = &TeleportEvent> {
        self.teleports
            .iter()
            .filter(move |e| e.is_registered() && e.involves(chain))
    }

    /// Registered teleport events across the whole network
    pub fn registered_events(&self) -> impl Iterator<Item = &TeleportEvent> {
        self.teleports.iter().filter(|e| e.is_registered())
    }
}

/// A chain's share of total network transfer volume, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainProportion(f64);

impl ChainProportion {
    /// Compute `part / whole`, clamped to [0, 1].
    ///
    /// Returns `None` when `whole` is zero, so callers branch instead of
    /// dividing by zero.
    pub fn of(part: f64, whole: f64) -> Option<Self> {
        if whole <= 0.0 {
            return None;
        }
        Some(Self((part / whole).clamp(0.0, 1.0)))
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for ChainProportion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.0)
    }
}
