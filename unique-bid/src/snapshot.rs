use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bid::Amount;

/// Distinct users that bid one amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBidders {
    pub amount: Amount,
    /// Sorted user ids
    pub users: Vec<String>,
}

impl AmountBidders {
    pub fn is_unique(&self) -> bool {
        self.users.len() == 1
    }
}

/// Point-in-time copy of every recorded bid.
///
/// Taken for monitoring; with writers in flight each amount is consistent
/// on its own but amounts may reflect slightly different moments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidsSnapshot {
    /// When this snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Lowest unique bid at the time the snapshot was taken
    pub lowest_unique_bid: Option<Amount>,

    /// Bidders per amount, ordered by amount
    pub amounts: Vec<AmountBidders>,
}

impl BidsSnapshot {
    /// Number of distinct user/amount pairs.
    pub fn total_bids(&self) -> usize {
        self.amounts.iter().map(|entry| entry.users.len()).sum()
    }

    /// Users that bid `amount`, if any.
    pub fn bidders(&self, amount: Amount) -> Option<&[String]> {
        self.amounts
            .binary_search_by_key(&amount, |entry| entry.amount)
            .ok()
            .map(|index| self.amounts[index].users.as_slice())
    }
}

/// Counters describing the current ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub distinct_amounts: usize,
    pub total_bids: usize,
    pub unique_amounts: usize,
}
