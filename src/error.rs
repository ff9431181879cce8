//! Error types for the Tally interpreter

use thiserror::Error;

/// Tally interpreter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Lexical errors
    /// Character that is neither a digit, an operator nor whitespace
    ///
    /// **Triggered by:** Scanning with `UnknownCharPolicy::Reject` (the default)
    /// **Example:** `1 + a` (the `a` at offset 4)
    /// **Prevention:** Use `UnknownCharPolicy::Skip` to drop such characters
    #[error("Unexpected character '{character}' at offset {offset}")]
    LexError {
        /// Offending character
        character: char,
        /// Character offset in the source (0-indexed)
        offset: usize,
    },

    // Structural errors
    /// Token out of place in the sequence
    ///
    /// **Triggered by:** Two operators in a row, a leading operator, or two
    /// operands with no operator between them
    /// **Example:** `1 + + 2`, `+1`, `1 2`
    #[error("Unexpected token at offset {offset}: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received
        got: String,
        /// Character offset of the actual token
        offset: usize,
    },

    /// Expression ends with an operator that has no right operand
    #[error("Expression ends with an operator at offset {offset} that has no right operand")]
    TrailingOperator {
        /// Character offset of the dangling operator
        offset: usize,
    },

    /// No tokens to build a tree from
    #[error("Empty expression")]
    EmptyExpression,

    // Arithmetic errors
    /// Integer literal or intermediate result does not fit in an `i64`
    ///
    /// **Example:** `9223372036854775807 + 1`
    #[error("Integer overflow: {message}")]
    Overflow {
        /// What overflowed
        message: String,
    },

    // Configuration errors
    /// Configuration could not be decoded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error category, following the anomaly classes the interpreter can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised while scanning characters
    Lexical,
    /// Raised while folding tokens into a tree
    Structural,
    /// Arithmetic went beyond the integer width
    Overflow,
    /// Bad configuration input
    Configuration,
}

impl Error {
    /// Create an overflow error with a message
    pub fn overflow(msg: impl Into<String>) -> Self {
        Error::Overflow {
            message: msg.into(),
        }
    }

    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::LexError { .. } => ErrorCategory::Lexical,

            Error::UnexpectedToken { .. } => ErrorCategory::Structural,
            Error::TrailingOperator { .. } => ErrorCategory::Structural,
            Error::EmptyExpression => ErrorCategory::Structural,

            Error::Overflow { .. } => ErrorCategory::Overflow,

            Error::Config(_) => ErrorCategory::Configuration,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for Tally operations
pub type Result<T> = std::result::Result<T, Error>;
