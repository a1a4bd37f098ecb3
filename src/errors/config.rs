//! Error types for adapter configuration.

/// Errors from building a custom [`AdapterConfig`](crate::config::AdapterConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The allocation split has no entries.
    #[error("Allocation split must name at least one token")]
    EmptyAllocationSplit,

    /// A share is non-positive or not finite.
    #[error("Invalid allocation share {share} for {symbol}")]
    InvalidShare {
        /// Token symbol the share was declared for
        symbol: String,
        /// The offending share
        share: f64,
    },

    /// Shares sum to more than 100% of the estimate.
    #[error("Allocation shares sum to {total}, exceeding 100% of the estimate")]
    AllocationExceedsWhole {
        /// Sum of all shares
        total: f64,
    },
}
