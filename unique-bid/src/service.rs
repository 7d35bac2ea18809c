use chrono::Utc;
use tracing::debug;

use crate::bid::{Amount, Bid};
use crate::error::{BidError, Result};
use crate::ledger::{BidLedger, Transition};
use crate::snapshot::{AmountBidders, BidsSnapshot, LedgerStats};
use crate::tracker::UniqueBidTracker;

/// Ledger and unique-amount tracker updated together, one bid at a time.
///
/// `BidService` is `Send + Sync`; share it behind an `Arc` and call it from
/// any number of threads.
///
/// # Example
/// ```
/// use unique_bid::BidService;
///
/// let service = BidService::new();
/// assert_eq!(service.submit_bid("alice", 100).unwrap(), Some(100));
/// assert_eq!(service.submit_bid("bob", 100).unwrap(), None);
/// assert_eq!(service.submit_bid("carol", 50).unwrap(), Some(50));
/// assert_eq!(service.lowest_unique_bid(), Some(50));
/// ```
#[derive(Debug, Default)]
pub struct BidService {
    ledger: BidLedger,
    tracker: UniqueBidTracker,
}

impl BidService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records a bid, returning the lowest unique bid after it.
    ///
    /// Invalid input fails before anything is recorded. Re-submitting an
    /// identical bid is a no-op.
    pub fn submit_bid(&self, user_id: impl Into<String>, amount: i64) -> Result<Option<Amount>> {
        let bid = Bid::new(user_id, amount)?;
        Ok(self.submit(&bid))
    }

    /// Records an already validated bid.
    ///
    /// The tracker is updated while the amount's ledger entry is locked, so
    /// per-amount transitions are applied in order.
    pub fn submit(&self, bid: &Bid) -> Option<Amount> {
        let transition = self
            .ledger
            .record_bid_with(bid, |transition| self.tracker.apply(transition));

        if transition == Transition::NoChange {
            debug!(
                user_id = bid.user_id(),
                amount = bid.amount(),
                "bid did not change unique set"
            );
        }

        self.tracker.lowest()
    }

    /// Lowest amount placed by exactly one user, `None` if there is none.
    pub fn lowest_unique_bid(&self) -> Option<Amount> {
        self.tracker.lowest()
    }

    pub fn snapshot(&self) -> BidsSnapshot {
        let lowest_unique_bid = self.tracker.lowest();
        let amounts = self
            .ledger
            .entries()
            .into_iter()
            .map(|(amount, users)| AmountBidders { amount, users })
            .collect();

        BidsSnapshot {
            timestamp: Utc::now(),
            lowest_unique_bid,
            amounts,
        }
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            distinct_amounts: self.ledger.distinct_amounts(),
            total_bids: self.ledger.total_bids(),
            unique_amounts: self.tracker.len(),
        }
    }

    /// Recomputes the unique set from the ledger and compares it with the
    /// tracker.
    ///
    /// Only meaningful while no bids are in flight.
    pub fn check_consistency(&self) -> Result<()> {
        let expected = self.ledger.unique_amounts();
        let actual = self.tracker.amounts();

        if expected != actual {
            return Err(BidError::invariant_violation(format!(
                "unique set {actual:?} does not match ledger {expected:?}"
            )));
        }

        let expected_lowest = expected.first().copied();
        let lowest = self.tracker.lowest();
        if lowest != expected_lowest {
            return Err(BidError::invariant_violation(format!(
                "lowest unique bid {lowest:?} does not match ledger minimum {expected_lowest:?}"
            )));
        }

        Ok(())
    }
}
