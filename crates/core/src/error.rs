//! Error types for textdiffer_core.

use std::fmt;
use thiserror::Error;

/// Which document of a comparison an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Errors that can occur around a diff computation
#[derive(Debug, Error)]
pub enum DiffError {
    /// A document has more tokens than the configured bound
    #[error("{side} text has {tokens} tokens, limit is {limit}")]
    InputTooLarge {
        side: Side,
        tokens: usize,
        limit: usize,
    },

    /// Options or results could not be (de)serialized
    #[error("Invalid diff options: {0}")]
    Options(#[from] serde_json::Error),
}
