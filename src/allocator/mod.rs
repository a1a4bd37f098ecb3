// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token allocation: turning a USD estimate into reportable raw balances.
//!
//! The estimate is split across the chain's registered stablecoins using the
//! configured shares, in preference order. Conversion to raw units floors;
//! the pipeline is never handed more value than was estimated. A stablecoin
//! absent on the chain forfeits its share; it is not redistributed.
//!
//! When none of the preferred stablecoins exist on a chain, the whole
//! estimate is priced in the chain's wrapped-native token at a fixed
//! reference price. That price is a hardcoded approximation, not a feed;
//! the fallback exists so such chains report something rather than nothing.

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use tracing::{debug, warn};

use crate::config::{registry, AdapterConfig, StableSymbol};
use crate::report::BalanceSink;
use crate::types::{NormalizedAmount, TokenAmount, TokenDecimals, UsdValue};

/// Compute the (token, raw amount) pairs for an estimate on a chain.
///
/// Pure: no reporting happens here. Returns an empty allocation only for
/// chains with neither registered stablecoins nor a wrapped-native token.
pub fn allocate(
    estimate: UsdValue,
    chain: NamedChain,
    split: &[(StableSymbol, f64)],
) -> Vec<(Address, TokenAmount)> {
    let mut allocation = Vec::with_capacity(split.len());

    for &(symbol, share) in split {
        let Some((address, decimals)) = registry::stablecoin(chain, symbol) else {
            debug!(%chain, %symbol, "Stablecoin not registered on chain, share forfeited");
            continue;
        };
        let raw = (estimate * share).to_raw_units(decimals);
        allocation.push((address, raw));
    }

    if allocation.is_empty() {
        if let Some(wrapped) = registry::wrapped_native(chain) {
            let units = NormalizedAmount::new(
                estimate.as_f64() / registry::WRAPPED_NATIVE_REFERENCE_PRICE_USD,
            );
            allocation.push((wrapped, units.to_raw_units(TokenDecimals::STANDARD)));
        }
    }

    allocation
}

/// Allocate `estimate` and report each pair through the sink.
pub fn report_allocation<S>(
    sink: &mut S,
    chain: NamedChain,
    estimate: UsdValue,
    config: &AdapterConfig,
) where
    S: BalanceSink + ?Sized,
{
    let allocation = allocate(estimate, chain, &config.allocation_split);
    if allocation.is_empty() {
        warn!(%chain, %estimate, "No allocatable token on chain, estimate dropped");
        return;
    }

    debug!(%chain, %estimate, tokens = allocation.len(), "Reporting allocation");
    for (token, amount) in allocation {
        sink.add_token_balance(chain, token, amount);
    }
}
