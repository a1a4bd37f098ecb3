// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Balance reporting seam.
//!
//! Adapters never hold balances themselves. Every result is pushed through
//! a [`BalanceSink`], the contract between this crate and the surrounding
//! TVL-reporting pipeline. Two report shapes exist:
//!
//! - **direct**: "this chain's balance sheet includes raw integer amount X
//!   of token Y"; amounts must already be decimal-correct for the token;
//! - **delegated**: "sum on-chain balances for this owner/token matrix";
//!   the sink performs the reads and folds results in itself.
//!
//! [`RpcBalanceSheet`] is the production implementation. Tests use an
//! in-memory recording sink instead.

mod rpc;

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use async_trait::async_trait;

use crate::errors::ReportError;
use crate::types::{TokenAmount, TokenSet};

pub use rpc::{batch_fetch_balances, BalanceQuery, RpcBalanceSheet};

/// Receiver for per-chain balance reports.
///
/// Object-safe so adapters can be driven against any pipeline
/// implementation (`&mut dyn BalanceSink` works).
#[async_trait]
pub trait BalanceSink: Send {
    /// Record a raw integer token amount on the chain's balance sheet.
    ///
    /// `amount` must already be expressed in the token's smallest unit.
    fn add_token_balance(&mut self, chain: NamedChain, token: Address, amount: TokenAmount);

    /// Sum on-chain balances over the owner/token cartesian product and
    /// fold them into the chain's balance sheet.
    ///
    /// Implementations should degrade per-entry failures to partial results
    /// where possible rather than failing the whole sweep.
    async fn sum_owner_tokens(
        &mut self,
        chain: NamedChain,
        owners: &[Address],
        tokens: &TokenSet,
    ) -> Result<(), ReportError>;
}
