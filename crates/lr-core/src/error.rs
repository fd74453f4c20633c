//! Error types for the divination engine.

use thiserror::Error;

/// Result type for divination operations.
pub type LiurenResult<T> = Result<T, LiurenError>;

/// Errors that can occur while preparing or casting a divination.
#[derive(Debug, Error)]
pub enum LiurenError {
    /// A numeric field was left empty.
    #[error("missing number: {0} is empty")]
    EmptyInput(&'static str),

    /// A numeric field could not be parsed as a number.
    #[error("invalid number: \"{0}\"")]
    InvalidNumber(String),

    /// A whole number too large for the engine's integer range.
    #[error("number out of range: \"{0}\"")]
    NumberOutOfRange(String),

    /// A numeric field was NaN or infinite.
    #[error("number must be finite: {0}")]
    NonFiniteNumber(f64),

    /// A numeric field had a fractional part.
    #[error("number must be a whole number: {0}")]
    FractionalNumber(f64),

    /// The question to divine on was blank.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// An hour outside 0-23 was supplied.
    #[error("hour out of range (0-23): {0}")]
    HourOutOfRange(u32),

    /// A palace position outside 1-6 was supplied.
    #[error("palace position out of range (1-6): {0}")]
    PositionOutOfRange(u32),

    /// A symbol name did not match any branch, palace, beast, element, or relation.
    #[error("unknown {kind}: \"{name}\"")]
    UnknownSymbol {
        /// The kind of symbol that was expected.
        kind: &'static str,
        /// The unmatched input.
        name: String,
    },

    /// A loaded record disagrees with what its own inputs produce.
    #[error("stored {0} does not match its inputs")]
    InconsistentRecord(&'static str),

    /// JSON serialization failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
