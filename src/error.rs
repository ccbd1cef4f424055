//! Error type shared by the input, preset and session layers.
//!
//! The trace builder itself is total over integer sequences; everything that
//! can fail sits around it (parsing user text, enforcing a length limit,
//! managing named presets).

use thiserror::Error;

/// Errors surfaced by the crate.
#[derive(Debug, Error)]
pub enum LisError {
    /// Text that does not parse as an integer.
    #[error("invalid input {0:?}: expected an integer")]
    InvalidInput(String),

    /// Sequence longer than the configured maximum.
    #[error("sequence of length {len} exceeds the configured maximum of {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("no example named {0:?}")]
    UnknownExample(String),

    #[error("example {0:?} is built in and cannot be deleted")]
    BuiltinExample(String),

    #[error("example name must not be empty")]
    EmptyExampleName,

    /// Removal index past the end of the sequence.
    #[error("position {index} is out of range for a sequence of length {len}")]
    PositionOutOfRange { index: usize, len: usize },

    /// Malformed preset file.
    #[error("malformed presets: {0}")]
    Presets(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LisError>;
