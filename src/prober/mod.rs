// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! On-chain fallback: probe bridge escrow balances directly.
//!
//! The terminal case of a TVL query. When the indexer yields nothing usable,
//! the prober assembles the chain's fixed probe lists (the bridge contracts
//! known to hold funds, and the tokens worth checking them for) and
//! delegates the owner/token balance sweep entirely to the sink. No
//! computation happens here, and there is no further fallback behind it.

use alloy_chains::NamedChain;
use tracing::{debug, warn};

use crate::config::{registry, StableSymbol};
use crate::errors::ReportError;
use crate::report::BalanceSink;
use crate::types::TokenSet;

/// The fixed probe token set for a chain: the native-token sentinel, the
/// wrapped-native token, and every registered stablecoin.
pub fn probe_tokens(chain: NamedChain) -> TokenSet {
    let mut tokens = TokenSet::new();
    tokens.insert(registry::NATIVE_TOKEN);
    if let Some(wrapped) = registry::wrapped_native(chain) {
        tokens.insert(wrapped);
    }
    for symbol in [StableSymbol::Usdc, StableSymbol::Usdt, StableSymbol::Dai] {
        if let Some((address, _)) = registry::stablecoin(chain, symbol) {
            tokens.insert(address);
        }
    }
    tokens
}

/// Delegate a balance sweep over the chain's bridge contracts to the sink.
pub async fn probe<S>(sink: &mut S, chain: NamedChain) -> Result<(), ReportError>
where
    S: BalanceSink + ?Sized,
{
    let owners = registry::bridge_owners(chain);
    if owners.is_empty() {
        warn!(%chain, "No bridge contracts registered for chain, nothing to probe");
        return Ok(());
    }

    let tokens = probe_tokens(chain);
    debug!(
        %chain,
        owners = owners.len(),
        tokens = tokens.len(),
        "Delegating on-chain balance probe"
    );
    sink.sum_owner_tokens(chain, owners, &tokens).await
}
