// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the bridge indexer fetch.

/// Errors that can occur while fetching or parsing a bridge snapshot.
///
/// Every variant is treated identically by the adapter, logged and folded
/// into the fallback branch, but the split keeps diagnostics useful when a
/// chain suddenly starts probing on-chain balances instead of estimating.
#[derive(Debug, thiserror::Error)]
pub enum IndexerError {
    /// HTTP transport failure (connect, TLS, timeout, body read).
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The indexer answered with a non-success HTTP status.
    #[error("Indexer returned HTTP {status}")]
    Status {
        /// The HTTP status code
        status: u16,
    },

    /// The GraphQL layer reported errors instead of data.
    #[error("GraphQL error: {message}")]
    GraphQl {
        /// First reported error message
        message: String,
    },

    /// The response parsed but carried no data payload.
    #[error("Indexer response carried no data")]
    MissingData,

    /// A numeric field failed to parse as a fixed-point integer.
    ///
    /// The indexer serializes BigInt values as decimal strings; anything
    /// else in those fields is a protocol violation.
    #[error("Invalid numeric value in field `{field}`: {value:?}")]
    InvalidNumeric {
        /// Wire field name
        field: &'static str,
        /// The offending value
        value: String,
    },
}

impl IndexerError {
    /// Create an `InvalidNumeric` error for a wire field.
    pub fn invalid_numeric(field: &'static str, value: impl Into<String>) -> Self {
        IndexerError::InvalidNumeric {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = IndexerError::Status { status: 502 };
        assert_eq!(err.to_string(), "Indexer returned HTTP 502");

        let err = IndexerError::invalid_numeric("totalTransfersIn", "not-a-number");
        assert!(err.to_string().contains("totalTransfersIn"));
    }
}
