//! Error types for the Neglect-o-Plant core library.

use std::fmt;

use thiserror::Error;

/// Top-level error type for all plant operations.
#[derive(Error, Debug)]
pub enum PlantError {
    /// A proposed plant name failed validation. No state was changed.
    #[error("Invalid plant name: {reason}")]
    InvalidName {
        /// Why the name was rejected.
        reason: NameRejection,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a rename request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NameRejection {
    /// Nothing left after trimming whitespace.
    Empty,
    /// Longer than the maximum length after trimming.
    TooLong {
        /// Length in characters after trimming.
        len: usize,
    },
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name is empty"),
            Self::TooLong { len } => write!(
                f,
                "name is {len} characters (max {})",
                crate::name::MAX_NAME_CHARS
            ),
        }
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PlantError>;
