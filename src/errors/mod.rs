//! Error types for the telescan library.
//!
//! Each failure surface has its own error type for fine-grained handling:
//!
//! - [`IndexerError`]: transport and protocol failures of the GraphQL fetch
//! - [`ReportError`]: failures raised by a [`BalanceSink`](crate::report::BalanceSink)
//! - [`ConfigError`]: invalid adapter configuration
//!
//! [`TelescanError`] unifies them for embedders that don't need to
//! distinguish sources; all module errors convert via `From`, so `?`
//! propagates naturally.
//!
//! Note that an indexer failure is deliberately NOT fatal to a TVL query:
//! the adapter folds it into
//! [`EstimateOutcome::TransportError`](crate::estimator::EstimateOutcome)
//! and takes the on-chain fallback path instead of surfacing the error.

mod config;
mod indexer;
mod report;

pub use config::ConfigError;
pub use indexer::IndexerError;
pub use report::ReportError;

/// Unified error type for all telescan operations.
#[derive(Debug, thiserror::Error)]
pub enum TelescanError {
    /// Error from the bridge indexer fetch.
    #[error("Indexer error: {0}")]
    Indexer(#[from] IndexerError),

    /// Error from a balance sink.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Invalid adapter configuration.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
