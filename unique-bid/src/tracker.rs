//! Set of amounts that currently have exactly one bidder.
//!
//! Updates go through a single mutex around an ordered set. After each
//! update the new minimum is published to an atomic while the lock is still
//! held, so `lowest()` never takes a lock and always sees the result of some
//! complete sequence of updates.

use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::bid::Amount;
use crate::ledger::Transition;

/// Published value meaning "set is empty". Valid amounts are at least 1.
const EMPTY: u64 = 0;

#[derive(Debug, Default)]
pub struct UniqueBidTracker {
    amounts: Mutex<BTreeSet<Amount>>,
    lowest: AtomicU64,
}

impl UniqueBidTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a transition reported by the ledger.
    pub fn apply(&self, transition: Transition) {
        let mut amounts = self.amounts.lock();

        let changed = match transition {
            Transition::NoChange => false,
            Transition::BecameUnique(amount) => amounts.insert(amount),
            Transition::BecameNonUnique(amount) => amounts.remove(&amount),
        };

        if changed {
            let lowest = amounts.first().copied().unwrap_or(EMPTY);
            self.lowest.store(lowest, Ordering::Release);
            debug!(?transition, lowest, unique = amounts.len(), "unique set updated");
        }
    }

    /// Smallest unique amount, `None` if there is none.
    pub fn lowest(&self) -> Option<Amount> {
        match self.lowest.load(Ordering::Acquire) {
            EMPTY => None,
            amount => Some(amount),
        }
    }

    pub fn len(&self) -> usize {
        self.amounts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.lock().is_empty()
    }

    pub fn contains(&self, amount: Amount) -> bool {
        self.amounts.lock().contains(&amount)
    }

    /// Sorted copy of the unique amounts.
    pub fn amounts(&self) -> BTreeSet<Amount> {
        self.amounts.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker() {
        let tracker = UniqueBidTracker::new();
        assert_eq!(tracker.lowest(), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_insert_tracks_minimum() {
        let tracker = UniqueBidTracker::new();
        tracker.apply(Transition::BecameUnique(30));
        assert_eq!(tracker.lowest(), Some(30));
        tracker.apply(Transition::BecameUnique(10));
        assert_eq!(tracker.lowest(), Some(10));
        tracker.apply(Transition::BecameUnique(20));
        assert_eq!(tracker.lowest(), Some(10));
        assert_eq!(tracker.len(), 3);
    }

    #[test]
    fn test_removing_minimum_promotes_next() {
        let tracker = UniqueBidTracker::new();
        tracker.apply(Transition::BecameUnique(10));
        tracker.apply(Transition::BecameUnique(20));
        tracker.apply(Transition::BecameNonUnique(10));
        assert_eq!(tracker.lowest(), Some(20));
        assert!(!tracker.contains(10));
    }

    #[test]
    fn test_removing_last_empties() {
        let tracker = UniqueBidTracker::new();
        tracker.apply(Transition::BecameUnique(100));
        tracker.apply(Transition::BecameNonUnique(100));
        assert_eq!(tracker.lowest(), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_no_change_is_noop() {
        let tracker = UniqueBidTracker::new();
        tracker.apply(Transition::BecameUnique(5));
        tracker.apply(Transition::NoChange);
        assert_eq!(tracker.lowest(), Some(5));
        assert_eq!(tracker.amounts(), BTreeSet::from([5]));
    }

    #[test]
    fn test_removing_non_minimum_keeps_lowest() {
        let tracker = UniqueBidTracker::new();
        tracker.apply(Transition::BecameUnique(1));
        tracker.apply(Transition::BecameUnique(50));
        tracker.apply(Transition::BecameNonUnique(50));
        assert_eq!(tracker.lowest(), Some(1));
        assert_eq!(tracker.len(), 1);
    }
}
