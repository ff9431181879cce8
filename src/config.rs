//! Interpreter configuration
//!
//! Configuration is always passed explicitly; nothing here is process-wide.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the scanner treats a character that is not a digit, an operator or
/// whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCharPolicy {
    /// Fail with `Error::LexError`
    #[default]
    Reject,
    /// Treat the character as a run terminator and drop it
    Skip,
}

/// Configuration for lexical analysis
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Policy for unrecognized characters (default: reject)
    pub unknown_chars: UnknownCharPolicy,
}

impl LexerConfig {
    /// Strict configuration: unknown characters are errors
    pub fn strict() -> Self {
        LexerConfig {
            unknown_chars: UnknownCharPolicy::Reject,
        }
    }

    /// Lenient configuration: unknown characters are skipped
    pub fn lenient() -> Self {
        LexerConfig {
            unknown_chars: UnknownCharPolicy::Skip,
        }
    }

    /// Decode a configuration from JSON, e.g. `{"unknown_chars": "skip"}`.
    /// Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
