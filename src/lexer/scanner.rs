use super::token::{Token, TokenKind};
use crate::config::{LexerConfig, UnknownCharPolicy};
use crate::error::{Error, Result};

/// Scanner for `+`/`-` integer expressions
///
/// Tokens can be pulled one at a time through the `Iterator` implementation
/// or collected in one go with [`Scanner::scan_tokens`]. After the first
/// error the iterator is exhausted.
pub struct Scanner {
    /// Source text as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Lexing policy
    config: LexerConfig,
    /// Set once an error has been yielded
    failed: bool,
}

impl Scanner {
    /// Creates a new scanner with the default (strict) configuration
    pub fn new(source: &str) -> Self {
        Scanner::with_config(source, LexerConfig::default())
    }

    /// Creates a new scanner with an explicit configuration
    pub fn with_config(source: &str, config: LexerConfig) -> Self {
        Scanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            config,
            failed: false,
        }
    }

    /// Scans all remaining tokens and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.by_ref().collect()
    }

    fn scan_token(&mut self) -> Option<Result<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            let c = self.advance();

            match c {
                '+' => return Some(Ok(self.make_token(TokenKind::Plus))),
                '-' => return Some(Ok(self.make_token(TokenKind::Minus))),

                c if c.is_ascii_digit() => return Some(Ok(self.scan_number())),

                // Whitespace only separates runs
                c if c.is_whitespace() => {}

                c => match self.config.unknown_chars {
                    UnknownCharPolicy::Reject => {
                        return Some(Err(Error::LexError {
                            character: c,
                            offset: self.start,
                        }));
                    }
                    UnknownCharPolicy::Skip => {
                        tracing::debug!(character = %c, offset = self.start, "skipping unknown character");
                    }
                },
            }
        }

        None
    }

    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        self.make_token(TokenKind::Integer)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        tracing::trace!(?kind, %lexeme, offset = self.start, "token");
        Token::new(kind, lexeme, self.start)
    }
}

impl Iterator for Scanner {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.scan_token();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Tokenizes `text` with the default (strict) configuration
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    Scanner::new(text).scan_tokens()
}

/// Tokenizes `text` with an explicit configuration
pub fn tokenize_with(text: &str, config: &LexerConfig) -> Result<Vec<Token>> {
    Scanner::with_config(text, config.clone()).scan_tokens()
}
