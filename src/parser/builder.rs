use super::ast::{BinaryOperation, Operand, Operation};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Incremental, left-associative tree builder
///
/// Holds the single open binary operation. When an operator arrives while
/// both operands are set, the open operation is collapsed into a literal
/// that becomes the left operand of the next one.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    /// Bound operator, `None` until an operator token is seen
    operation: Option<Operation>,
    /// Offset of the bound operator token
    operator_offset: usize,
    /// Left operand
    left: Option<Operand>,
    /// Right operand, only ever set after `operation`
    right: Option<Operand>,
}

impl TreeBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    /// Feeds one token into the tree
    pub fn push(&mut self, token: &Token) -> Result<()> {
        match token.kind {
            TokenKind::Integer => {
                let literal = Operand::Literal(Self::parse_literal(token)?);

                if self.left.is_none() {
                    self.left = Some(literal);
                } else if self.operation.is_some() && self.right.is_none() {
                    self.right = Some(literal);
                } else {
                    return Err(Self::unexpected("operator", token));
                }
            }
            TokenKind::Plus | TokenKind::Minus => {
                if self.left.is_none() || (self.operation.is_some() && self.right.is_none()) {
                    return Err(Self::unexpected("integer", token));
                }

                self.collapse()?;
                self.operation = Some(match token.kind {
                    TokenKind::Plus => Operation::Addition,
                    _ => Operation::Subtraction,
                });
                self.operator_offset = token.offset;
            }
        }

        Ok(())
    }

    /// Finishes the tree and returns its root
    pub fn finish(self) -> Result<Operand> {
        match (self.left, self.operation, self.right) {
            (None, _, _) => Err(Error::EmptyExpression),
            (Some(left), None, _) => Ok(left),
            (Some(_), Some(_), None) => Err(Error::TrailingOperator {
                offset: self.operator_offset,
            }),
            (Some(left), Some(op), Some(right)) => Ok(BinaryOperation::new(op, left, right).into()),
        }
    }

    /// Replaces a complete operation with a literal of its value
    fn collapse(&mut self) -> Result<()> {
        if let (Some(op), Some(left), Some(right)) =
            (self.operation, self.left.as_ref(), self.right.as_ref())
        {
            let value = op.apply(left.value()?, right.value()?)?;
            tracing::debug!(%op, value, "collapsed completed operation");

            self.left = Some(Operand::Literal(value));
            self.operation = None;
            self.right = None;
        }

        Ok(())
    }

    fn parse_literal(token: &Token) -> Result<i64> {
        let digits = &token.lexeme;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedToken {
                expected: "decimal digits".to_string(),
                got: format!("`{}`", digits),
                offset: token.offset,
            });
        }

        // Only digits remain, so the one possible failure is overflow
        digits
            .parse()
            .map_err(|_| Error::overflow(format!("literal {} does not fit in i64", digits)))
    }

    fn unexpected(expected: &str, token: &Token) -> Error {
        Error::UnexpectedToken {
            expected: expected.to_string(),
            got: Self::token_kind_name(token),
            offset: token.offset,
        }
    }

    fn token_kind_name(token: &Token) -> String {
        match token.kind {
            TokenKind::Integer => format!("integer {}", token.lexeme),
            TokenKind::Plus => "`+`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
        }
    }
}
