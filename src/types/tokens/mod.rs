//! Strong types for token-related values
//!
//! Newtype wrappers that keep incompatible units from mixing:
//!
//! ```text
//! TokenAmount (U256, raw)
//!     |
//!     | normalize(TokenDecimals)
//!     ↓
//! NormalizedAmount (f64, human-readable)
//!     |
//!     | × price            | UsdValue::to_raw_units(TokenDecimals)
//!     ↓                    ↑
//! UsdValue (f64, USD) ─────┘
//! ```
//!
//! The downward conversion (normalize) is used when reading indexer and
//! on-chain data; the upward conversion (`to_raw_units`, floor) is used when
//! the allocator turns a USD estimate back into reportable raw balances.

mod amount;
mod decimals;
mod normalized;
mod set;
mod usd;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use normalized::NormalizedAmount;
pub use set::TokenSet;
pub use usd::UsdValue;
