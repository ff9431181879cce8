use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Addition,
    /// Subtraction (-)
    Subtraction,
}

impl Operation {
    /// Applies the operation with checked arithmetic
    pub fn apply(self, left: i64, right: i64) -> Result<i64> {
        let result = match self {
            Operation::Addition => left.checked_add(right),
            Operation::Subtraction => left.checked_sub(right),
        };

        result.ok_or_else(|| Error::overflow(format!("{} {} {}", left, self, right)))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "+"),
            Operation::Subtraction => write!(f, "-"),
        }
    }
}

/// Anything that yields an integer value: a literal or a binary operation
/// over two owned operands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// Integer literal
    Literal(i64),
    /// Binary operation: left op right
    Binary(BinaryOperation),
}

/// Complete binary operation node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryOperation {
    /// Operator
    pub op: Operation,
    /// Left operand
    pub left: Box<Operand>,
    /// Right operand
    pub right: Box<Operand>,
}

impl BinaryOperation {
    /// Creates a new binary operation node
    pub fn new(op: Operation, left: Operand, right: Operand) -> Self {
        BinaryOperation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluates both sides and applies the operator
    pub fn value(&self) -> Result<i64> {
        self.op.apply(self.left.value()?, self.right.value()?)
    }
}

impl Operand {
    /// Computes the integer value of the tree. Reading never mutates the
    /// tree, so repeated calls yield the same result.
    pub fn value(&self) -> Result<i64> {
        match self {
            Operand::Literal(n) => Ok(*n),
            Operand::Binary(binary) => binary.value(),
        }
    }

    /// Check if operand is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Operand::Literal(_))
    }
}

impl From<BinaryOperation> for Operand {
    fn from(binary: BinaryOperation) -> Self {
        Operand::Binary(binary)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Literal(n) => write!(f, "{}", n),
            Operand::Binary(binary) => write!(f, "{}", binary),
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_value() {
        assert_eq!(Operand::Literal(-4).value().unwrap(), -4);
    }

    #[test]
    fn test_nested_value_and_display() {
        let inner = BinaryOperation::new(
            Operation::Subtraction,
            Operand::Literal(10),
            Operand::Literal(11),
        );
        let root = Operand::from(BinaryOperation::new(
            Operation::Addition,
            inner.into(),
            Operand::Literal(2),
        ));

        assert_eq!(root.value().unwrap(), 1);
        assert_eq!(root.to_string(), "((10 - 11) + 2)");
        assert!(!root.is_literal());
    }

    #[test]
    fn test_overflow_is_reported() {
        let root = Operand::from(BinaryOperation::new(
            Operation::Subtraction,
            Operand::Literal(i64::MIN),
            Operand::Literal(1),
        ));

        assert!(matches!(root.value(), Err(Error::Overflow { .. })));
    }
}
