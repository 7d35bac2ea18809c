//! Record of which users bid which amounts.
//!
//! Locking is two-level: a reader/writer lock over the amount map (write
//! access only to create a new entry) and one mutex per amount. Bids at
//! different amounts never wait on each other's entry lock.

use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tracing::trace;

use crate::bid::{Amount, Bid};

/// Effect of one insertion on an amount's unique/non-unique status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Duplicate bid, or a third (or later) bidder at an already shared amount.
    NoChange,
    /// First bidder at this amount.
    BecameUnique(Amount),
    /// Second distinct bidder at this amount.
    BecameNonUnique(Amount),
}

/// Distinct users that bid one amount. Never empty once created.
type AmountEntry = HashSet<String>;

#[derive(Debug, Default)]
pub struct BidLedger {
    entries: RwLock<HashMap<Amount, Arc<Mutex<AmountEntry>>>>,
}

impl BidLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a bid and reports the resulting transition.
    pub fn record_bid(&self, bid: &Bid) -> Transition {
        self.record_bid_with(bid, |_| ())
    }

    /// Records a bid and hands the transition to `on_transition` while the
    /// amount's lock is still held.
    ///
    /// Two bids at the same amount therefore deliver their transitions in
    /// the same order they mutated the entry.
    pub fn record_bid_with<F>(&self, bid: &Bid, on_transition: F) -> Transition
    where
        F: FnOnce(Transition),
    {
        let entry = self.entry(bid.amount());
        let mut users = entry.lock();

        let transition = if !users.insert(bid.user_id().to_owned()) {
            Transition::NoChange
        } else {
            match users.len() {
                1 => Transition::BecameUnique(bid.amount()),
                2 => Transition::BecameNonUnique(bid.amount()),
                _ => Transition::NoChange,
            }
        };

        trace!(
            user_id = bid.user_id(),
            amount = bid.amount(),
            bidders = users.len(),
            ?transition,
            "recorded bid"
        );

        on_transition(transition);
        transition
    }

    /// Returns the entry for `amount`, creating it on first use.
    fn entry(&self, amount: Amount) -> Arc<Mutex<AmountEntry>> {
        if let Some(entry) = self.entries.read().get(&amount) {
            return entry.clone();
        }

        self.entries
            .write()
            .entry(amount)
            .or_insert_with(|| Arc::new(Mutex::new(AmountEntry::new())))
            .clone()
    }

    /// Number of distinct users that bid `amount`.
    pub fn bidders(&self, amount: Amount) -> usize {
        self.entries
            .read()
            .get(&amount)
            .map(|entry| entry.lock().len())
            .unwrap_or(0)
    }

    /// Whether this exact user/amount pair has been recorded.
    pub fn contains(&self, bid: &Bid) -> bool {
        self.entries
            .read()
            .get(&bid.amount())
            .map(|entry| entry.lock().contains(bid.user_id()))
            .unwrap_or(false)
    }

    /// Number of amounts that received at least one bid.
    pub fn distinct_amounts(&self) -> usize {
        self.entries.read().len()
    }

    /// Number of distinct user/amount pairs.
    pub fn total_bids(&self) -> usize {
        self.entries
            .read()
            .values()
            .map(|entry| entry.lock().len())
            .sum()
    }

    /// Copy of every entry, ordered by amount, users sorted.
    ///
    /// Entries are locked one at a time, so with writers in flight the copy
    /// is consistent per amount but not across amounts.
    pub fn entries(&self) -> Vec<(Amount, Vec<String>)> {
        let map = self.entries.read();
        let mut entries: Vec<_> = map
            .iter()
            .map(|(&amount, entry)| {
                let users: BTreeSet<String> = entry.lock().iter().cloned().collect();
                (amount, users.into_iter().collect())
            })
            .collect();
        entries.sort_unstable_by_key(|(amount, _)| *amount);
        entries
    }

    /// Amounts with exactly one bidder, recomputed from scratch.
    pub fn unique_amounts(&self) -> BTreeSet<Amount> {
        self.entries
            .read()
            .iter()
            .filter(|(_, entry)| entry.lock().len() == 1)
            .map(|(&amount, _)| amount)
            .collect()
    }
}
