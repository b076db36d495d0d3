//! Crate error type.
//!
//! Draw quantities are `usize`, so the only failure modes left are domain
//! errors: asking for zero elements, or for more elements than the bag
//! holds. Absent values are never errors — `remove` on a missing value is
//! a no-op and membership checks just return `false`.

use thiserror::Error;

/// Errors raised by the random-draw operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BagError {
    #[error("cannot pick zero elements from a bag")]
    ZeroPick,

    #[error("cannot pick {requested} elements from a bag holding {available}")]
    NotEnoughElements { requested: usize, available: usize },
}

/// Shorthand result type for fallible `Bag` operations.
pub type BagResult<T> = Result<T, BagError>;
