// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and static bridge registries
//!
//! This module centralizes the immutable lookup tables the estimator and
//! prober depend on: chain-id mappings, the bridge's asset registry, token
//! addresses per chain, and the escrow contracts known to hold bridge funds.
//! Everything here is compiled in and loaded once; nothing is re-declared
//! per call.

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address};

use crate::types::TokenDecimals;

use super::StableSymbol;

/// Chains the bridge is registered on, in display order
pub const SUPPORTED_CHAINS: &[NamedChain] = &[
    NamedChain::Mainnet,
    NamedChain::Optimism,
    NamedChain::BinanceSmartChain,
    NamedChain::Polygon,
    NamedChain::Base,
    NamedChain::Arbitrum,
    NamedChain::Avalanche,
];

/// Sentinel token address for a chain's native (gas) token
pub const NATIVE_TOKEN: Address = Address::ZERO;

/// Fixed reference price used when an estimate must be expressed in the
/// chain's wrapped-native token because no registered stablecoin exists
/// there. A deliberate approximation, not a live feed.
pub const WRAPPED_NATIVE_REFERENCE_PRICE_USD: f64 = 2500.0;

/// Map a bridge-registered numeric chain id to its canonical chain.
///
/// Stats and events referencing ids outside this table are excluded from
/// every estimator sum.
pub fn chain_for_id(id: u64) -> Option<NamedChain> {
    match id {
        1 => Some(NamedChain::Mainnet),
        10 => Some(NamedChain::Optimism),
        56 => Some(NamedChain::BinanceSmartChain),
        137 => Some(NamedChain::Polygon),
        8453 => Some(NamedChain::Base),
        42161 => Some(NamedChain::Arbitrum),
        43114 => Some(NamedChain::Avalanche),
        _ => None,
    }
}

/// A bridge-registered asset: display symbol and its true ERC-20 decimals.
///
/// Note that teleport amounts on the wire do NOT use these decimals; the
/// indexer serializes all amounts in 18-decimal precision. The declared
/// decimals are kept here so a future wire-format correction is local to
/// the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Display symbol
    pub symbol: &'static str,
    /// Decimals the asset declares on-chain
    pub decimals: TokenDecimals,
}

/// Resolve a bridge asset id to its descriptor.
///
/// Events with ids outside this table are excluded from every sum.
pub fn asset_for_id(id: &str) -> Option<AssetDescriptor> {
    let descriptor = match id {
        "1" => AssetDescriptor {
            symbol: "USDC",
            decimals: TokenDecimals::USDC,
        },
        "2" => AssetDescriptor {
            symbol: "USDT",
            decimals: TokenDecimals::USDT,
        },
        "3" => AssetDescriptor {
            symbol: "DAI",
            decimals: TokenDecimals::DAI,
        },
        "4" => AssetDescriptor {
            symbol: "WETH",
            decimals: TokenDecimals::STANDARD,
        },
        "5" => AssetDescriptor {
            symbol: "WBTC",
            decimals: TokenDecimals::WBTC,
        },
        _ => return None,
    };
    Some(descriptor)
}

/// Well-known stablecoin addresses per chain
pub mod stablecoins {
    use super::*;

    /// Native USDC on Ethereum Mainnet
    pub const ETH_USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
    /// USDT on Ethereum Mainnet
    pub const ETH_USDT: Address = address!("dac17f958d2ee523a2206206994597c13d831ec7");
    /// DAI on Ethereum Mainnet
    pub const ETH_DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");

    /// Native USDC on Arbitrum One
    pub const ARB_USDC: Address = address!("af88d065e77c8cc2239327c5edb3a432268e5831");
    /// USDT on Arbitrum One
    pub const ARB_USDT: Address = address!("fd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9");
    /// DAI on Arbitrum One
    pub const ARB_DAI: Address = address!("da10009cbd5d07dd0cecc66161fc93d7c9000da1");

    /// Native USDC on OP Mainnet
    pub const OP_USDC: Address = address!("0b2c639c533813f4aa9d7837caf62653d097ff85");
    /// USDT on OP Mainnet
    pub const OP_USDT: Address = address!("94b008aa00579c1307b0ef2c499ad98a8ce58e58");
    /// DAI on OP Mainnet
    pub const OP_DAI: Address = address!("da10009cbd5d07dd0cecc66161fc93d7c9000da1");

    /// Native USDC on Base
    pub const BASE_USDC: Address = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");
    /// Bridged USDT on Base
    pub const BASE_USDT: Address = address!("fde4c96c8593536e31f229ea8f37b2ada2699bb2");
    /// DAI on Base
    pub const BASE_DAI: Address = address!("50c5725949a6f0c72e6c4a641f24049a917db0cb");

    /// Native USDC on Polygon PoS
    pub const POLYGON_USDC: Address = address!("3c499c542cef5e3811e1192ce70d8cc03d5c3359");
    /// USDT on Polygon PoS
    pub const POLYGON_USDT: Address = address!("c2132d05d31c914a87c6611c10748aeb04b58e8f");
    /// DAI on Polygon PoS
    pub const POLYGON_DAI: Address = address!("8f3cf7ad23cd3cadbd9735aff958023239c6a063");

    /// Binance-Peg USDC on BSC (18 decimals, unlike native USDC)
    pub const BSC_BINANCE_PEG_USDC: Address = address!("8ac76a51cc950d9822d68b83fe1ad97b32cd580d");
    /// Binance-Peg USDT on BSC (18 decimals)
    pub const BSC_USDT: Address = address!("55d398326f99059ff775485246999027b3197955");
    /// Binance-Peg DAI on BSC
    pub const BSC_DAI: Address = address!("1af3f329e8be154074d8769d1ffa4ee058b1dbc3");

    /// Native USDC on Avalanche C-Chain
    pub const AVAX_USDC: Address = address!("b97ef9ef8734c71904d8002f8b6bc66dd9c48a6e");
    /// USDT on Avalanche C-Chain
    pub const AVAX_USDT: Address = address!("9702230a8ea53601f5cd2dc00fdbc13d4df4a8c7");
    /// DAI.e on Avalanche C-Chain
    pub const AVAX_DAI: Address = address!("d586e7f844cea2f87f50152665bcbc2c279d8d70");
}

/// Wrapped-native token addresses per chain
pub mod wrapped {
    use super::*;

    /// WETH on Ethereum Mainnet
    pub const ETH_WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    /// WETH on Arbitrum One
    pub const ARB_WETH: Address = address!("82af49447d8a07e3bd95bd0d56f35241523fbab1");
    /// WETH predeploy on OP-stack chains (OP Mainnet, Base)
    pub const OP_STACK_WETH: Address = address!("4200000000000000000000000000000000000006");
    /// WPOL on Polygon PoS
    pub const POLYGON_WPOL: Address = address!("0d500b1d8e8ef31e21c99d1db9a6444d3adf1270");
    /// WBNB on BSC
    pub const BSC_WBNB: Address = address!("bb4cdb9cbd36b01bd1cbaef60af814a3f6f0ee75");
    /// WAVAX on Avalanche C-Chain
    pub const AVAX_WAVAX: Address = address!("b31f66aa3c1e785363f0875a1b74e27b85fd66c7");
}

/// Bridge contracts known to hold funds
mod bridge {
    use super::*;

    /// Teleport gateway, deployed at the same address on every chain
    pub const GATEWAY: Address = address!("9a4f1e7c63d28be14a0c5f8e21d93b70a46e5cd2");
    /// Escrow vault, deployed at the same address on every chain
    pub const ESCROW: Address = address!("3d82b16f0a975cc44be09e51fda2f6b18c430a7e");
    /// Pre-migration escrow that still holds wind-down funds on mainnet
    pub const LEGACY_VAULT: Address = address!("c5e09f14d7a36280b14f2c7dd0893ab65271f0b4");

    pub const MAINNET_OWNERS: &[Address] = &[GATEWAY, ESCROW, LEGACY_VAULT];
    pub const DEFAULT_OWNERS: &[Address] = &[GATEWAY, ESCROW];
}

/// Look up a stablecoin address and its decimals for a chain.
///
/// Binance-Peg stables on BSC carry 18 decimals; native USDC/USDT elsewhere
/// carry 6.
pub fn stablecoin(chain: NamedChain, symbol: StableSymbol) -> Option<(Address, TokenDecimals)> {
    use stablecoins::*;
    use StableSymbol::*;

    let entry = match (chain, symbol) {
        (NamedChain::Mainnet, Usdc) => (ETH_USDC, TokenDecimals::USDC),
        (NamedChain::Mainnet, Usdt) => (ETH_USDT, TokenDecimals::USDT),
        (NamedChain::Mainnet, Dai) => (ETH_DAI, TokenDecimals::DAI),

        (NamedChain::Arbitrum, Usdc) => (ARB_USDC, TokenDecimals::USDC),
        (NamedChain::Arbitrum, Usdt) => (ARB_USDT, TokenDecimals::USDT),
        (NamedChain::Arbitrum, Dai) => (ARB_DAI, TokenDecimals::DAI),

        (NamedChain::Optimism, Usdc) => (OP_USDC, TokenDecimals::USDC),
        (NamedChain::Optimism, Usdt) => (OP_USDT, TokenDecimals::USDT),
        (NamedChain::Optimism, Dai) => (OP_DAI, TokenDecimals::DAI),

        (NamedChain::Base, Usdc) => (BASE_USDC, TokenDecimals::USDC),
        (NamedChain::Base, Usdt) => (BASE_USDT, TokenDecimals::USDT),
        (NamedChain::Base, Dai) => (BASE_DAI, TokenDecimals::DAI),

        (NamedChain::Polygon, Usdc) => (POLYGON_USDC, TokenDecimals::USDC),
        (NamedChain::Polygon, Usdt) => (POLYGON_USDT, TokenDecimals::USDT),
        (NamedChain::Polygon, Dai) => (POLYGON_DAI, TokenDecimals::DAI),

        (NamedChain::BinanceSmartChain, Usdc) => (BSC_BINANCE_PEG_USDC, TokenDecimals::STANDARD),
        (NamedChain::BinanceSmartChain, Usdt) => (BSC_USDT, TokenDecimals::STANDARD),
        (NamedChain::BinanceSmartChain, Dai) => (BSC_DAI, TokenDecimals::STANDARD),

        (NamedChain::Avalanche, Usdc) => (AVAX_USDC, TokenDecimals::USDC),
        (NamedChain::Avalanche, Usdt) => (AVAX_USDT, TokenDecimals::USDT),
        (NamedChain::Avalanche, Dai) => (AVAX_DAI, TokenDecimals::DAI),

        _ => return None,
    };
    Some(entry)
}

/// Look up the chain's wrapped-native token address
pub fn wrapped_native(chain: NamedChain) -> Option<Address> {
    use wrapped::*;

    let addr = match chain {
        NamedChain::Mainnet => ETH_WETH,
        NamedChain::Arbitrum => ARB_WETH,
        NamedChain::Optimism | NamedChain::Base => OP_STACK_WETH,
        NamedChain::Polygon => POLYGON_WPOL,
        NamedChain::BinanceSmartChain => BSC_WBNB,
        NamedChain::Avalanche => AVAX_WAVAX,
        _ => return None,
    };
    Some(addr)
}

/// Bridge contracts known to hold funds on the given chain.
///
/// Empty for chains the bridge is not registered on.
pub fn bridge_owners(chain: NamedChain) -> &'static [Address] {
    match chain {
        NamedChain::Mainnet => bridge::MAINNET_OWNERS,
        c if SUPPORTED_CHAINS.contains(&c) => bridge::DEFAULT_OWNERS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_round_trip() {
        assert_eq!(chain_for_id(1), Some(NamedChain::Mainnet));
        assert_eq!(chain_for_id(42161), Some(NamedChain::Arbitrum));
        assert_eq!(chain_for_id(8453), Some(NamedChain::Base));
        assert_eq!(chain_for_id(31337), None);
    }

    #[test]
    fn test_every_supported_chain_has_usdc() {
        for &chain in SUPPORTED_CHAINS {
            assert!(
                stablecoin(chain, StableSymbol::Usdc).is_some(),
                "missing USDC entry for {chain}"
            );
        }
    }

    #[test]
    fn test_every_supported_chain_has_wrapped_native_and_owners() {
        for &chain in SUPPORTED_CHAINS {
            assert!(wrapped_native(chain).is_some());
            assert!(!bridge_owners(chain).is_empty());
        }
    }

    #[test]
    fn test_bsc_peg_stables_use_standard_decimals() {
        let (_, decimals) = stablecoin(NamedChain::BinanceSmartChain, StableSymbol::Usdt).unwrap();
        assert_eq!(decimals, TokenDecimals::STANDARD);
        let (_, decimals) = stablecoin(NamedChain::Arbitrum, StableSymbol::Usdt).unwrap();
        assert_eq!(decimals, TokenDecimals::USDT);
    }

    #[test]
    fn test_unsupported_chain_has_no_entries() {
        assert!(stablecoin(NamedChain::Sonic, StableSymbol::Usdc).is_none());
        assert!(wrapped_native(NamedChain::Sonic).is_none());
        assert!(bridge_owners(NamedChain::Sonic).is_empty());
    }

    #[test]
    fn test_asset_registry() {
        let usdc = asset_for_id("1").unwrap();
        assert_eq!(usdc.symbol, "USDC");
        assert_eq!(usdc.decimals, TokenDecimals::USDC);
        assert!(asset_for_id("99").is_none());
    }

    #[test]
    fn test_mainnet_includes_legacy_vault() {
        assert_eq!(bridge_owners(NamedChain::Mainnet).len(), 3);
        assert_eq!(bridge_owners(NamedChain::Arbitrum).len(), 2);
    }
}
