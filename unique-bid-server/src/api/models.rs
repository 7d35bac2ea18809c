use serde::{Deserialize, Serialize};
use unique_bid::{to_sentinel, BidsSnapshot, LedgerStats};

/// Body of `POST /api/bids`
///
/// Field checks (non-blank user, positive amount) are done by the core when
/// the bid is submitted, so this type accepts any values of the right shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    /// Identifier of the user placing the bid
    pub user_id: String,

    /// Bid amount (must be positive)
    pub amount: i64,
}

/// Response for bid operations
#[derive(Debug, Serialize, Deserialize)]
pub struct BidResponse {
    /// Status message
    pub message: String,
}

impl BidResponse {
    pub fn placed() -> Self {
        Self {
            message: "Bid placed successfully".to_string(),
        }
    }
}

/// Response for `GET /api/internal/bids`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidsSnapshotResponse {
    /// ISO 8601 timestamp of when the snapshot was taken
    pub timestamp: String,

    /// Lowest unique bid, -1 if none
    pub lowest_unique_bid: i64,

    pub stats: StatsResponse,

    /// Map of amount to the users that bid it
    pub bids: Vec<AmountBiddersResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub distinct_amounts: usize,
    pub total_bids: usize,
    pub unique_amounts: usize,
}

impl From<LedgerStats> for StatsResponse {
    fn from(stats: LedgerStats) -> Self {
        Self {
            distinct_amounts: stats.distinct_amounts,
            total_bids: stats.total_bids,
            unique_amounts: stats.unique_amounts,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AmountBiddersResponse {
    pub amount: u64,
    pub users: Vec<String>,
}

/// Transform a core snapshot to API response format
pub fn transform_snapshot(snapshot: BidsSnapshot, stats: LedgerStats) -> BidsSnapshotResponse {
    BidsSnapshotResponse {
        // Format: "2025-01-20T12:00:00.000Z"
        timestamp: snapshot
            .timestamp
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string(),
        lowest_unique_bid: to_sentinel(snapshot.lowest_unique_bid),
        stats: stats.into(),
        bids: snapshot
            .amounts
            .into_iter()
            .map(|entry| AmountBiddersResponse {
                amount: entry.amount,
                users: entry.users,
            })
            .collect(),
    }
}
