//! Lexical analysis for Tally
//!
//! Converts source text into a stream of integer and operator tokens.

mod scanner;
mod token;

pub use scanner::{tokenize, tokenize_with, Scanner};
pub use token::{Token, TokenKind};
