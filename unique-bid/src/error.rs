use thiserror::Error;

/// Main error type for the unique-bid library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BidError {
    /// Invalid bid input (blank user id, non-positive amount).
    ///
    /// Always raised before any state is touched.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The ledger and the unique-amount set disagree.
    ///
    /// Only produced by consistency checks; reaching it means a bug.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Type alias for Results in this library.
pub type Result<T> = std::result::Result<T, BidError>;

impl BidError {
    /// Creates an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an InvariantViolation error.
    pub fn invariant_violation(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
