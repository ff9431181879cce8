//! # Tally - Left-to-Right Integer Expressions
//!
//! A small interpreter for integer expressions built from `+` and `-`.
//! Expressions are read strictly left to right, so `10 - 11 + 2` means
//! `(10 - 11) + 2`.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::{parse, tokenize};
//!
//! # fn main() -> tally::Result<()> {
//! // Tokenize
//! let tokens = tokenize("10 - 11 + 2")?;
//!
//! // Build the operand tree
//! let tree = parse(&tokens)?;
//!
//! // Evaluate
//! assert_eq!(tree.value()?, 1);
//! # Ok(())
//! # }
//! ```
//!
//! Or in one step:
//!
//! ```rust
//! assert_eq!(tally::evaluate("1 + 2 + 3").unwrap(), 6);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Scanner → Tokens → TreeBuilder → Operand → value()
//! ```
//!
//! - [`Scanner`] - Tokenizes source text, lazily or all at once
//! - [`Parser`] / [`TreeBuilder`] - Fold tokens into a left-associative tree
//! - [`Operand`] - Tree node that yields an integer value
//! - [`LexerConfig`] - Policy for characters the scanner does not recognize
//!
//! ## Error Handling
//!
//! Malformed input never evaluates to a silent default:
//!
//! ```rust
//! use tally::{evaluate, Error, ErrorCategory};
//!
//! let err = evaluate("1 + + 2").unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Structural);
//!
//! let err = evaluate("9223372036854775807 + 1").unwrap_err();
//! assert!(matches!(err, Error::Overflow { .. }));
//! ```
//!
//! Unknown characters are rejected by default. The lenient policy drops
//! them instead:
//!
//! ```rust
//! use tally::{evaluate_with, LexerConfig};
//!
//! assert!(tally::evaluate("4 + x2").is_err());
//! assert_eq!(evaluate_with("4 + x2", &LexerConfig::lenient()).unwrap(), 6);
//! ```

/// Version of the Tally interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use config::{LexerConfig, UnknownCharPolicy};
pub use error::{Error, ErrorCategory, Result};
pub use lexer::{tokenize, tokenize_with, Scanner, Token, TokenKind};
pub use parser::{parse, BinaryOperation, Operand, Operation, Parser, TreeBuilder};

/// Tokenizes, parses and evaluates `source` with the default configuration
pub fn evaluate(source: &str) -> Result<i64> {
    evaluate_with(source, &LexerConfig::default())
}

/// Tokenizes, parses and evaluates `source` with an explicit configuration
pub fn evaluate_with(source: &str, config: &LexerConfig) -> Result<i64> {
    let tokens = tokenize_with(source, config)?;
    parse(&tokens)?.value()
}
