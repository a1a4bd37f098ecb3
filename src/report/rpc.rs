// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! RPC-backed balance sheet.
//!
//! All `balanceOf` reads for one sweep are issued in parallel via
//! `futures::join_all`; a provider configured with Alloy's `CallBatchLayer`
//! collapses them into a single Multicall3 request. Individual read
//! failures are logged and skipped so a stalled token contributes a partial
//! value instead of aborting the sweep.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use alloy_chains::NamedChain;
use alloy_erc20_full::LazyToken;
use alloy_network::Network;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::config::registry::NATIVE_TOKEN;
use crate::errors::ReportError;
use crate::types::{TokenAmount, TokenSet};

use super::BalanceSink;

/// Query for one balance read: (token_address, holder_address).
///
/// The zero address denotes the chain's native token; it is read with
/// `eth_getBalance` instead of `balanceOf`.
pub type BalanceQuery = (Address, Address);

/// Fetch balances for multiple (token, holder) pairs in parallel.
///
/// Returns one result per query, `Ok((token, holder, balance))` or
/// `Err((token, holder, error_message))`. Order matches the input.
pub async fn batch_fetch_balances<N, P>(
    provider: &P,
    queries: &[BalanceQuery],
) -> Vec<Result<(Address, Address, U256), (Address, Address, String)>>
where
    N: Network,
    P: Provider<N> + Clone,
{
    if queries.is_empty() {
        return vec![];
    }

    debug!(count = queries.len(), "Batch fetching balances");

    let fetches: Vec<_> = queries
        .iter()
        .map(|&(token, holder)| {
            let provider = provider.clone();
            async move {
                let result = if token == NATIVE_TOKEN {
                    provider.get_balance(holder).await.map_err(|e| e.to_string())
                } else {
                    LazyToken::new(token, provider)
                        .balance_of(holder)
                        .await
                        .map_err(|e| e.to_string())
                };
                match result {
                    Ok(balance) => Ok((token, holder, balance)),
                    Err(e) => {
                        warn!(?token, ?holder, error = %e, "Failed to fetch balance");
                        Err((token, holder, e))
                    }
                }
            }
        })
        .collect();

    join_all(fetches).await
}

/// [`BalanceSink`] that reads delegated balances over RPC and accumulates
/// everything into an in-memory per-token balance sheet.
///
/// One instance represents one chain's sheet for one TVL invocation; it is
/// not reused across chains or calls.
///
/// # Example
///
/// ```rust,ignore
/// use telescan::{RpcBalanceSheet, TeleportAdapter};
/// use alloy_chains::NamedChain;
///
/// let mut sheet = RpcBalanceSheet::new(provider);
/// TeleportAdapter::standard().tvl(NamedChain::Base, &mut sheet).await?;
/// for (token, amount) in sheet.balances() {
///     println!("{token}: {amount}");
/// }
/// ```
#[derive(Debug)]
pub struct RpcBalanceSheet<N, P> {
    provider: P,
    balances: BTreeMap<Address, TokenAmount>,
    _network: PhantomData<N>,
}

impl<N, P> RpcBalanceSheet<N, P>
where
    N: Network,
    P: Provider<N> + Clone,
{
    /// Create an empty balance sheet backed by the given provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            balances: BTreeMap::new(),
            _network: PhantomData,
        }
    }

    /// Accumulated raw balances per token address
    pub fn balances(&self) -> &BTreeMap<Address, TokenAmount> {
        &self.balances
    }

    /// Consume the sheet and return the accumulated balances
    pub fn into_balances(self) -> BTreeMap<Address, TokenAmount> {
        self.balances
    }

    fn accumulate(&mut self, token: Address, amount: TokenAmount) {
        *self.balances.entry(token).or_insert(TokenAmount::ZERO) += amount;
    }
}

#[async_trait]
impl<N, P> BalanceSink for RpcBalanceSheet<N, P>
where
    N: Network,
    P: Provider<N> + Clone + Send + Sync,
{
    fn add_token_balance(&mut self, chain: NamedChain, token: Address, amount: TokenAmount) {
        debug!(%chain, ?token, %amount, "Direct balance report");
        self.accumulate(token, amount);
    }

    async fn sum_owner_tokens(
        &mut self,
        chain: NamedChain,
        owners: &[Address],
        tokens: &TokenSet,
    ) -> Result<(), ReportError> {
        let queries: Vec<BalanceQuery> = tokens
            .iter()
            .flat_map(|&token| owners.iter().map(move |&owner| (token, owner)))
            .collect();

        debug!(%chain, queries = queries.len(), "Delegated balance sweep");

        let mut fetched = 0usize;
        let mut skipped = 0usize;
        for result in batch_fetch_balances(&self.provider, &queries).await {
            match result {
                Ok((token, _holder, balance)) => {
                    fetched += 1;
                    if !balance.is_zero() {
                        self.accumulate(token, TokenAmount::new(balance));
                    }
                }
                // already logged by the fetcher; a partial sheet beats none
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(%chain, fetched, skipped, "Balance sweep completed with partial results");
        }
        Ok(())
    }
}
