// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-chain TVL entry point.
//!
//! [`TeleportAdapter`] wires the linear chain together: fetch a snapshot,
//! estimate the chain's value, then either allocate the estimate into
//! stablecoin balances or probe the bridge contracts on-chain. All results
//! flow through the caller's [`BalanceSink`]; `tvl` itself returns nothing
//! on success.
//!
//! The `methodology` string and `hallmarks` annotations exist for the
//! surrounding reporting pipeline's display layer only; nothing in the
//! computation reads them.

use alloy_chains::NamedChain;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::allocator;
use crate::config::{registry, AdapterConfig};
use crate::errors::ReportError;
use crate::estimator::{EstimateOutcome, Estimator};
use crate::indexer::IndexerClient;
use crate::prober;
use crate::report::BalanceSink;

/// A dated annotation shown alongside the TVL chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hallmark {
    /// When the event happened
    pub timestamp: DateTime<Utc>,
    /// Short display label
    pub label: &'static str,
}

const METHODOLOGY: &str = "TVL is estimated from the bridge indexer's network-wide statistics. \
     When the chain participates directly in recent teleports, the normalized sum of its inbound \
     and outbound transfer volume is used. Otherwise the chain's share of cumulative inbound \
     volume is applied to the total teleported value. When the indexer is unreachable or reports \
     nothing usable, TVL falls back to summing on-chain balances held by the bridge contracts.";

// (unix timestamp, label)
const HALLMARKS: &[(i64, &str)] = &[
    (1_686_700_800, "Teleport gateway launch"),
    (1_727_654_400, "Burn-and-mint migration; escrow balances begin winding down"),
];

/// TVL adapter for the teleport bridge.
///
/// One instance can serve any number of chains; each [`tvl`](Self::tvl)
/// call is an independent computation from a fresh snapshot.
///
/// # Example
///
/// ```rust,ignore
/// use alloy_chains::NamedChain;
/// use telescan::{RpcBalanceSheet, TeleportAdapter};
///
/// let adapter = TeleportAdapter::standard();
/// let mut sheet = RpcBalanceSheet::new(provider);
/// adapter.tvl(NamedChain::Optimism, &mut sheet).await?;
/// ```
#[derive(Debug, Clone)]
pub struct TeleportAdapter {
    indexer: IndexerClient,
    estimator: Estimator,
}

impl TeleportAdapter {
    /// Create an adapter against the production indexer endpoint
    pub fn new(config: AdapterConfig) -> Self {
        let indexer = IndexerClient::production(config.max_events);
        Self::with_indexer(indexer, config)
    }

    /// Create an adapter against a specific indexer client (useful for
    /// staging endpoints and tests)
    pub fn with_indexer(indexer: IndexerClient, config: AdapterConfig) -> Self {
        Self {
            indexer,
            estimator: Estimator::new(config),
        }
    }

    /// Adapter with the standard strategy table
    pub fn standard() -> Self {
        Self::new(AdapterConfig::standard())
    }

    /// Adapter with the legacy strategy table
    pub fn legacy() -> Self {
        Self::new(AdapterConfig::legacy())
    }

    /// Chains this adapter reports TVL for
    pub fn supported_chains() -> &'static [NamedChain] {
        registry::SUPPORTED_CHAINS
    }

    /// Human-readable description of how the estimate is produced
    pub fn methodology() -> &'static str {
        METHODOLOGY
    }

    /// Dated annotations for the reporting pipeline's display layer
    pub fn hallmarks() -> Vec<Hallmark> {
        HALLMARKS
            .iter()
            .filter_map(|&(ts, label)| {
                DateTime::from_timestamp(ts, 0).map(|timestamp| Hallmark { timestamp, label })
            })
            .collect()
    }

    /// Compute and report the chain's TVL.
    ///
    /// Produces no value of its own; every result is a side effect on the
    /// sink. An indexer failure is folded into the on-chain fallback path,
    /// never surfaced; the only error source is the sink itself.
    pub async fn tvl<S>(&self, chain: NamedChain, sink: &mut S) -> Result<(), ReportError>
    where
        S: BalanceSink + ?Sized,
    {
        let outcome = match self.indexer.fetch_snapshot().await {
            Ok(snapshot) => self.estimator.estimate(&snapshot, chain),
            Err(e) => {
                warn!(%chain, error = %e, "Indexer fetch failed, treating as no data");
                EstimateOutcome::TransportError
            }
        };

        match outcome {
            EstimateOutcome::Estimate { value, strategy } => {
                info!(%chain, %value, ?strategy, "Reporting estimated TVL");
                allocator::report_allocation(sink, chain, value, self.estimator.config());
                Ok(())
            }
            EstimateOutcome::InsufficientData | EstimateOutcome::TransportError => {
                prober::probe(sink, chain).await
            }
        }
    }
}
