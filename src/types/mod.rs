//! Core data types for bridge TVL estimation

mod bridge;
pub mod tokens;

pub use bridge::{BridgeSnapshot, ChainProportion, ChainStat, TeleportEvent};
pub use tokens::{NormalizedAmount, TokenAmount, TokenDecimals, TokenSet, UsdValue};
