use serde::{Deserialize, Serialize};

/// A single token from the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token (the digit run for integers)
    pub lexeme: String,
    /// Character offset where the token starts (0-indexed)
    pub offset: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, offset: usize) -> Self {
        Token {
            kind,
            lexeme,
            offset,
        }
    }

    /// Integer token holding `digits`
    pub fn integer(digits: impl Into<String>, offset: usize) -> Self {
        Token::new(TokenKind::Integer, digits.into(), offset)
    }

    /// `+` operator token
    pub fn plus(offset: usize) -> Self {
        Token::new(TokenKind::Plus, "+".to_string(), offset)
    }

    /// `-` operator token
    pub fn minus(offset: usize) -> Self {
        Token::new(TokenKind::Minus, "-".to_string(), offset)
    }
}

/// All possible token types in Tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Unsigned decimal integer literal; the digits live in `Token::lexeme`
    Integer,
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::Integer => write!(f, "Integer({})", self.lexeme),
            TokenKind::Plus => write!(f, "Plus"),
            TokenKind::Minus => write!(f, "Minus"),
        }
    }
}
