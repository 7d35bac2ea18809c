use crate::error::{BidError, Result};

/// A bid amount. Always at least 1 once inside a [`Bid`].
pub type Amount = u64;

/// Wire value for "no unique bid".
pub const NO_UNIQUE_BID: i64 = -1;

/// Converts a lowest unique bid into its integer wire form.
///
/// `None` maps to [`NO_UNIQUE_BID`]. Amounts above `i64::MAX` saturate.
pub fn to_sentinel(lowest: Option<Amount>) -> i64 {
    match lowest {
        Some(amount) => i64::try_from(amount).unwrap_or(i64::MAX),
        None => NO_UNIQUE_BID,
    }
}

/// A validated bid: a non-blank user id and a positive amount.
///
/// The only way to obtain a `Bid` is through [`Bid::new`], so every `Bid`
/// reaching the ledger is already valid.
///
/// # Example
/// ```
/// use unique_bid::Bid;
///
/// let bid = Bid::new("alice", 100).unwrap();
/// assert_eq!(bid.user_id(), "alice");
/// assert_eq!(bid.amount(), 100);
///
/// assert!(Bid::new("", 100).is_err());
/// assert!(Bid::new("bob", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bid {
    user_id: String,
    amount: Amount,
}

impl Bid {
    /// Validates and creates a bid.
    ///
    /// # Arguments
    /// * `user_id` - Identifier of the bidder, must contain a non-whitespace character
    /// * `amount` - Bid amount, must be strictly positive
    pub fn new(user_id: impl Into<String>, amount: i64) -> Result<Self> {
        let user_id = user_id.into();

        if user_id.trim().is_empty() {
            return Err(BidError::invalid_argument("User ID is required"));
        }

        let amount = match Amount::try_from(amount) {
            Ok(amount) if amount > 0 => amount,
            _ => {
                return Err(BidError::invalid_argument(format!(
                    "Bid amount must be a positive number, got {amount}"
                )))
            }
        };

        Ok(Self { user_id, amount })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bid() {
        let bid = Bid::new("alice", 5).unwrap();
        assert_eq!(bid.user_id(), "alice");
        assert_eq!(bid.amount(), 5);
    }

    #[test]
    fn test_rejects_blank_user() {
        for user in ["", " ", "\t\n"] {
            let err = Bid::new(user, 10).unwrap_err();
            assert!(matches!(err, BidError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        for amount in [0, -1, i64::MIN] {
            let err = Bid::new("alice", amount).unwrap_err();
            assert!(matches!(err, BidError::InvalidArgument(_)));
            assert!(err.to_string().contains("positive"));
        }
    }

    #[test]
    fn test_user_id_kept_verbatim() {
        let bid = Bid::new(" alice ", 1).unwrap();
        assert_eq!(bid.user_id(), " alice ");
    }

    #[test]
    fn test_bids_compare_by_user_and_amount() {
        assert_eq!(Bid::new("alice", 3).unwrap(), Bid::new("alice", 3).unwrap());
        assert_ne!(Bid::new("alice", 3).unwrap(), Bid::new("Alice", 3).unwrap());
        assert_ne!(Bid::new("alice", 3).unwrap(), Bid::new("alice", 4).unwrap());
    }

    #[test]
    fn test_sentinel_conversion() {
        assert_eq!(to_sentinel(None), NO_UNIQUE_BID);
        assert_eq!(to_sentinel(Some(42)), 42);
        assert_eq!(to_sentinel(Some(u64::MAX)), i64::MAX);
    }
}
