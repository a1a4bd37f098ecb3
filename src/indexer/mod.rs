// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! GraphQL client for the bridge indexer.
//!
//! One fixed query document fetches every chain's aggregate stats and the
//! recent teleport events in a single round trip. The indexer offers no
//! server-side filtering by chain, so each TVL invocation works from the
//! same network-wide snapshot.
//!
//! Failure policy: no retries and no custom timeout (the transport default
//! applies). Any failure maps to an [`IndexerError`]; the adapter treats
//! every variant as "no data" and falls back to on-chain probing.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::AdapterConfig;
use crate::errors::IndexerError;
use crate::types::{BridgeSnapshot, ChainStat, TeleportEvent, TokenAmount};

/// Production indexer endpoint
pub const DEFAULT_ENDPOINT: &str = "https://indexer.teleport.exchange/graphql";

/// The fixed snapshot query. The only variable part is the result-count cap
/// on the event list; chain stats are small enough to fetch unconditionally.
fn snapshot_query(max_events: usize) -> String {
    format!(
        r#"{{
  chainStats(first: 100) {{
    id
    totalTransfersIn
    totalFees
    messagesSent
    messagesReceived
  }}
  teleportEvents(first: {max_events}, orderBy: timestamp, orderDirection: desc) {{
    assetId
    amount
    sourceChain
    destChain
  }}
}}"#
    )
}

#[derive(Debug, Serialize)]
struct GraphQuery {
    query: String,
}

#[derive(Debug, Deserialize)]
struct GraphResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphError>>,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotData {
    chain_stats: Vec<RawChainStat>,
    teleport_events: Vec<RawTeleportEvent>,
}

/// Wire form of a chain stat: BigInt fields arrive as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChainStat {
    id: String,
    total_transfers_in: String,
    total_fees: String,
    messages_sent: String,
    messages_received: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTeleportEvent {
    asset_id: String,
    amount: String,
    source_chain: String,
    dest_chain: String,
}

fn parse_u64(field: &'static str, value: &str) -> Result<u64, IndexerError> {
    value
        .parse::<u64>()
        .map_err(|_| IndexerError::invalid_numeric(field, value))
}

fn parse_amount(field: &'static str, value: &str) -> Result<TokenAmount, IndexerError> {
    value
        .parse::<U256>()
        .map(TokenAmount::new)
        .map_err(|_| IndexerError::invalid_numeric(field, value))
}

impl RawChainStat {
    fn into_domain(self) -> Result<ChainStat, IndexerError> {
        Ok(ChainStat {
            chain_id: parse_u64("chainStats.id", &self.id)?,
            total_transfers_in: parse_amount("totalTransfersIn", &self.total_transfers_in)?,
            total_fees: parse_amount("totalFees", &self.total_fees)?,
            messages_sent: parse_u64("messagesSent", &self.messages_sent)?,
            messages_received: parse_u64("messagesReceived", &self.messages_received)?,
        })
    }
}

impl RawTeleportEvent {
    fn into_domain(self) -> Result<TeleportEvent, IndexerError> {
        Ok(TeleportEvent {
            amount: parse_amount("amount", &self.amount)?,
            source_chain: parse_u64("sourceChain", &self.source_chain)?,
            dest_chain: parse_u64("destChain", &self.dest_chain)?,
            asset_id: self.asset_id,
        })
    }
}

/// Client for the bridge indexer's GraphQL endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use telescan::IndexerClient;
///
/// let client = IndexerClient::default();
/// let snapshot = client.fetch_snapshot().await?;
/// println!("{} chains, {} events", snapshot.chain_stats.len(), snapshot.teleports.len());
/// ```
#[derive(Debug, Clone)]
pub struct IndexerClient {
    endpoint: Url,
    client: reqwest::Client,
    max_events: usize,
}

impl IndexerClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: Url, max_events: usize) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
            max_events,
        }
    }

    /// Create a client for the production endpoint
    pub fn production(max_events: usize) -> Self {
        let endpoint =
            Url::parse(DEFAULT_ENDPOINT).expect("default indexer endpoint is a valid URL");
        Self::new(endpoint, max_events)
    }

    /// The endpoint this client queries
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch one network-wide snapshot.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, GraphQL-level error,
    /// missing data payload, or malformed numeric field. Callers are
    /// expected to treat every error as "no data" rather than propagate.
    pub async fn fetch_snapshot(&self) -> Result<BridgeSnapshot, IndexerError> {
        let query = GraphQuery {
            query: snapshot_query(self.max_events),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexerError::Status {
                status: status.as_u16(),
            });
        }

        let body: GraphResponse<SnapshotData> = response.json().await?;

        if let Some(errors) = body.errors {
            let message = errors
                .into_iter()
                .next()
                .map(|e| e.message)
                .unwrap_or_else(|| "unspecified".to_string());
            return Err(IndexerError::GraphQl { message });
        }

        let data = body.data.ok_or(IndexerError::MissingData)?;
        let snapshot = convert_snapshot(data)?;

        debug!(
            chains = snapshot.chain_stats.len(),
            events = snapshot.teleports.len(),
            "Fetched bridge snapshot"
        );
        Ok(snapshot)
    }
}

impl Default for IndexerClient {
    fn default() -> Self {
        Self::production(AdapterConfig::DEFAULT_MAX_EVENTS)
    }
}

fn convert_snapshot(data: SnapshotData) -> Result<BridgeSnapshot, IndexerError> {
    let chain_stats = data
        .chain_stats
        .into_iter()
        .map(RawChainStat::into_domain)
        .collect::<Result<Vec<_>, _>>()?;
    let teleports = data
        .teleport_events
        .into_iter()
        .map(RawTeleportEvent::into_domain)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BridgeSnapshot {
        chain_stats,
        teleports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "data": {
            "chainStats": [
                {
                    "id": "42161",
                    "totalTransfersIn": "5000000000000000000000",
                    "totalFees": "12000000000000000000",
                    "messagesSent": "150",
                    "messagesReceived": "149"
                }
            ],
            "teleportEvents": [
                {
                    "assetId": "1",
                    "amount": "250000000000000000000",
                    "sourceChain": "1",
                    "destChain": "42161"
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_snapshot_fixture() {
        let body: GraphResponse<SnapshotData> = serde_json::from_str(FIXTURE).unwrap();
        let snapshot = convert_snapshot(body.data.unwrap()).unwrap();
        assert_eq!(snapshot.chain_stats.len(), 1);
        assert_eq!(snapshot.chain_stats[0].chain_id, 42161);
        assert_eq!(snapshot.chain_stats[0].messages_sent, 150);
        assert_eq!(snapshot.teleports.len(), 1);
        assert_eq!(snapshot.teleports[0].asset_id, "1");
    }

    #[test]
    fn test_graphql_errors_take_precedence() {
        let raw = r#"{ "data": null, "errors": [{ "message": "rate limited" }] }"#;
        let body: GraphResponse<SnapshotData> = serde_json::from_str(raw).unwrap();
        assert!(body.data.is_none());
        assert_eq!(body.errors.unwrap()[0].message, "rate limited");
    }

    #[test]
    fn test_malformed_numeric_is_rejected() {
        let raw = RawTeleportEvent {
            asset_id: "1".to_string(),
            amount: "not-a-number".to_string(),
            source_chain: "1".to_string(),
            dest_chain: "10".to_string(),
        };
        let err = raw.into_domain().unwrap_err();
        assert!(matches!(
            err,
            IndexerError::InvalidNumeric { field: "amount", .. }
        ));
    }

    #[test]
    fn test_query_document_carries_event_cap() {
        let query = snapshot_query(250);
        assert!(query.contains("teleportEvents(first: 250"));
        assert!(query.contains("chainStats"));
        assert!(query.contains("totalTransfersIn"));
    }

    #[test]
    fn test_default_client_endpoint() {
        let client = IndexerClient::default();
        assert_eq!(client.endpoint().as_str(), DEFAULT_ENDPOINT);
    }
}
