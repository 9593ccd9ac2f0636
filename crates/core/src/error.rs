//! Store error model.

use thiserror::Error;

/// Result type used across the store crates.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Every variant is a deterministic, recoverable business failure. None of
/// them is fatal to the process and none is retried automatically; retry is
/// the caller's decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A quantity or name argument was out of range (e.g. a non-positive count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A reservation would exceed what the warehouse currently holds.
    #[error("insufficient stock for {good}: requested {requested}, available {available}")]
    InsufficientStock {
        good: String,
        requested: u64,
        available: u64,
    },

    /// A direct withdrawal found no remaining units.
    #[error("out of stock: {good}")]
    OutOfStock { good: String },

    /// Order conversion hit a shortfall and was rolled back.
    ///
    /// `missing` lists the units that could not be withdrawn, in drain order.
    #[error("order failed, rolled back ({} unit(s) missing)", missing.len())]
    OrderFailed { missing: Vec<String> },
}

impl StoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn insufficient_stock(good: impl Into<String>, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            good: good.into(),
            requested,
            available,
        }
    }

    pub fn out_of_stock(good: impl Into<String>) -> Self {
        Self::OutOfStock { good: good.into() }
    }

    pub fn order_failed(missing: Vec<String>) -> Self {
        Self::OrderFailed { missing }
    }
}
