//! Unique Bid - tracks the lowest bid amount placed by exactly one user
//!
//! Bids are recorded in a ledger mapping each amount to the distinct users
//! that bid it. Every insertion yields a [`Transition`] that keeps a separate
//! set of currently-unique amounts up to date, so the lowest unique bid is
//! read in constant time instead of being recomputed.
//!
//! # Features
//! - Per-amount locking: bids at different amounts do not serialize on each other
//! - Lock-free reads of the lowest unique bid
//! - Idempotent re-bids, validation before any mutation
//!
//! # Example
//! ```
//! use unique_bid::{to_sentinel, BidService};
//!
//! let service = BidService::new();
//!
//! service.submit_bid("a", 10)?;
//! service.submit_bid("b", 20)?;
//! service.submit_bid("c", 10)?;
//!
//! // 10 is shared, 20 is not
//! assert_eq!(service.lowest_unique_bid(), Some(20));
//!
//! // Wire form uses -1 for "no unique bid"
//! assert_eq!(to_sentinel(BidService::new().lowest_unique_bid()), -1);
//! # Ok::<(), unique_bid::BidError>(())
//! ```

// Public modules
pub mod error;

// Data structures
mod bid;
mod ledger;
mod service;
mod snapshot;
mod tracker;

// Public exports
pub use bid::{to_sentinel, Amount, Bid, NO_UNIQUE_BID};
pub use error::{BidError, Result};
pub use ledger::{BidLedger, Transition};
pub use service::BidService;
pub use snapshot::{AmountBidders, BidsSnapshot, LedgerStats};
pub use tracker::UniqueBidTracker;
