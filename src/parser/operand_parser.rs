use super::ast::Operand;
use super::builder::TreeBuilder;
use crate::error::Result;
use crate::lexer::Token;

/// Parser that folds a token sequence into an operand tree
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    /// Creates a new parser
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens }
    }

    /// Parses the tokens into a tree root
    pub fn parse(&self) -> Result<Operand> {
        parse(&self.tokens)
    }
}

/// Folds `tokens` into a left-associative operand tree
pub fn parse(tokens: &[Token]) -> Result<Operand> {
    let mut builder = TreeBuilder::new();

    for token in tokens {
        builder.push(token)?;
    }

    builder.finish()
}
