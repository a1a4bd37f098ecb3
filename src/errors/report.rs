//! Error types for balance reporting.

/// Errors a [`BalanceSink`](crate::report::BalanceSink) may raise.
///
/// The bundled [`RpcBalanceSheet`](crate::report::RpcBalanceSheet) never
/// fails a whole sweep (individual balance reads are logged and skipped),
/// so in practice this surfaces only from custom sink implementations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// RPC failure while summing on-chain balances.
    #[error("RPC failure during balance summation: {details}")]
    Rpc {
        /// Details about the failure
        details: String,
    },

    /// A custom sink rejected a report.
    #[error("Sink rejected report: {details}")]
    Rejected {
        /// Details about the rejection
        details: String,
    },
}

impl ReportError {
    /// Create an `Rpc` error with details.
    pub fn rpc(details: impl Into<String>) -> Self {
        ReportError::Rpc {
            details: details.into(),
        }
    }

    /// Create a `Rejected` error with details.
    pub fn rejected(details: impl Into<String>) -> Self {
        ReportError::Rejected {
            details: details.into(),
        }
    }
}
