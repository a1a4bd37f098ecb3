// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # telescan
//!
//! Rust library for estimating the Total Value Locked of a burn-and-mint
//! "teleport" bridge, per EVM chain.
//!
//! A burn-and-mint bridge destroys tokens on the source chain and mints them
//! on the destination chain, so no single contract balance represents the
//! value the protocol secures. telescan instead derives a per-chain USD
//! estimate from the bridge indexer's network-wide statistics, and falls back
//! to summing on-chain escrow balances when the indexer has nothing usable.
//!
//! # Architecture
//!
//! One TVL query is a linear chain with no shared state between invocations:
//!
//! ```text
//! IndexerClient (GraphQL snapshot)
//!     |
//!     v
//! Estimator (direct involvement -> proportional share -> insufficient data)
//!     |
//!     +--> TokenAllocator (estimate -> raw stablecoin balances)  \
//!     |                                                           +--> BalanceSink
//!     +--> FallbackProber (escrow owner/token balance sweep)     /
//! ```
//!
//! The [`BalanceSink`] trait is the seam to the surrounding TVL-reporting
//! pipeline: direct reports carry already-decimal-correct raw integer
//! amounts, delegated reports hand over an owner/token matrix for on-chain
//! summation. [`RpcBalanceSheet`] is the production implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use alloy_chains::NamedChain;
//! use telescan::{AdapterConfig, RpcBalanceSheet, TeleportAdapter};
//!
//! let adapter = TeleportAdapter::standard();
//! let mut sheet = RpcBalanceSheet::new(provider);
//!
//! adapter.tvl(NamedChain::Arbitrum, &mut sheet).await?;
//!
//! for (token, amount) in sheet.balances() {
//!     println!("{token}: {amount}");
//! }
//! ```

pub mod adapter;
pub mod allocator;
pub mod config;
pub mod errors;
pub mod estimator;
pub mod indexer;
pub mod prober;
pub mod report;
pub mod types;

pub use adapter::{Hallmark, TeleportAdapter};
pub use config::{registry, AdapterConfig, StableSymbol};
pub use errors::{ConfigError, IndexerError, ReportError, TelescanError};
pub use estimator::{EstimateOutcome, Estimator, Strategy, WIRE_DECIMALS};
pub use indexer::IndexerClient;
pub use report::{BalanceSink, RpcBalanceSheet};
pub use types::{
    BridgeSnapshot, ChainProportion, ChainStat, NormalizedAmount, TeleportEvent, TokenAmount,
    TokenDecimals, TokenSet, UsdValue,
};
