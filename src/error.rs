//! Error types for color parsing.

use thiserror::Error;

/// Errors that can occur when parsing a `#rrggbb` color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string does not start with `#`
    #[error("Color '{input}' must start with '#'")]
    MissingHash {
        /// The rejected input
        input: String,
    },

    /// Wrong number of hex digits after the `#`
    #[error("Color '{input}' must have exactly 6 hex digits, found {found}")]
    InvalidLength {
        /// The rejected input
        input: String,
        /// Number of characters found after the `#`
        found: usize,
    },

    /// A character after the `#` is not a hex digit
    #[error("Color '{input}' contains non-hex character '{character}'")]
    InvalidDigit {
        /// The rejected input
        input: String,
        /// The first offending character
        character: char,
    },
}

impl ColorError {
    /// Create a missing hash error.
    pub fn missing_hash(input: impl Into<String>) -> Self {
        Self::MissingHash {
            input: input.into(),
        }
    }

    /// Create an invalid length error.
    pub fn invalid_length(input: impl Into<String>, found: usize) -> Self {
        Self::InvalidLength {
            input: input.into(),
            found,
        }
    }

    /// Create an invalid digit error.
    pub fn invalid_digit(input: impl Into<String>, character: char) -> Self {
        Self::InvalidDigit {
            input: input.into(),
            character,
        }
    }
}
