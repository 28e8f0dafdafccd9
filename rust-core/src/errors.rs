//! Error types for symmetry-operator handling
//!
//! Parsing failures and underspecified operator sets are reported through
//! [`SymmetryError`]; every fallible operation in the crate returns
//! [`SymmetryResult`].

use thiserror::Error;

/// Errors that can occur while building or testing symmetry operators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymmetryError {
    /// An algebraic operator string could not be decomposed
    #[error("Parse error in '{input}': {message}")]
    Parse {
        /// The offending operator (or axis expression)
        input: String,
        /// What went wrong
        message: String,
    },

    /// An operation needs at least one operator but got none
    #[error("Underspecified input: {0}")]
    Underspecified(String),
}

impl SymmetryError {
    /// Create a parse error for a given input
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        SymmetryError::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an underspecified-input error
    pub fn underspecified(message: impl Into<String>) -> Self {
        SymmetryError::Underspecified(message.into())
    }

    /// Check whether this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, SymmetryError::Parse { .. })
    }
}

/// Result type for symmetry operations
pub type SymmetryResult<T> = std::result::Result<T, SymmetryError>;
