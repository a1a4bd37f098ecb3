// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for telescan integration tests
//!
//! Provides an in-memory [`BalanceSink`] recorder and snapshot builders so
//! adapter flows can be exercised without blockchain or indexer access.

// Not every test binary uses every helper.
#![allow(dead_code)]

use alloy_chains::NamedChain;
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use telescan::errors::ReportError;
use telescan::report::BalanceSink;
use telescan::{BridgeSnapshot, ChainStat, TeleportEvent, TokenAmount, TokenSet};

/// One whole unit in the indexer's 18-decimal wire precision
pub const ONE: u128 = 1_000_000_000_000_000_000;

/// Build a chain stat with the given whole-unit inbound volume
pub fn stat(chain_id: u64, volume_units: u128) -> ChainStat {
    ChainStat {
        chain_id,
        total_transfers_in: TokenAmount::new(U256::from(volume_units * ONE)),
        total_fees: TokenAmount::ZERO,
        messages_sent: 0,
        messages_received: 0,
    }
}

/// Build a teleport event with the given whole-unit amount
pub fn teleport(asset_id: &str, units: u128, source: u64, dest: u64) -> TeleportEvent {
    TeleportEvent {
        asset_id: asset_id.to_string(),
        amount: TokenAmount::new(U256::from(units * ONE)),
        source_chain: source,
        dest_chain: dest,
    }
}

/// Build a snapshot from stats and events
pub fn snapshot(chain_stats: Vec<ChainStat>, teleports: Vec<TeleportEvent>) -> BridgeSnapshot {
    BridgeSnapshot {
        chain_stats,
        teleports,
    }
}

/// In-memory [`BalanceSink`] that records every report it receives.
///
/// # Example
///
/// ```rust,ignore
/// let mut sink = MemorySink::new();
/// adapter.tvl(NamedChain::Arbitrum, &mut sink).await?;
/// assert!(sink.direct_reports.is_empty());
/// assert_eq!(sink.sweeps.len(), 1);
/// ```
#[derive(Default)]
pub struct MemorySink {
    /// Every `add_token_balance` call: (chain, token, raw amount)
    pub direct_reports: Vec<(NamedChain, Address, TokenAmount)>,
    /// Every `sum_owner_tokens` call: (chain, owners, tokens)
    pub sweeps: Vec<(NamedChain, Vec<Address>, TokenSet)>,
    fail_sweeps: bool,
}

impl MemorySink {
    /// A sink that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose delegated sweeps fail, for error-path tests
    pub fn failing_sweeps() -> Self {
        Self {
            fail_sweeps: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl BalanceSink for MemorySink {
    fn add_token_balance(&mut self, chain: NamedChain, token: Address, amount: TokenAmount) {
        self.direct_reports.push((chain, token, amount));
    }

    async fn sum_owner_tokens(
        &mut self,
        chain: NamedChain,
        owners: &[Address],
        tokens: &TokenSet,
    ) -> Result<(), ReportError> {
        if self.fail_sweeps {
            return Err(ReportError::rpc("sweep disabled in this test"));
        }
        self.sweeps.push((chain, owners.to_vec(), tokens.clone()));
        Ok(())
    }
}
