//! Tally Parser Module
//!
//! Folds a token sequence into a left-associative operand tree and evaluates it.

mod ast;
mod builder;
mod operand_parser;

pub use ast::{BinaryOperation, Operand, Operation};
pub use builder::TreeBuilder;
pub use operand_parser::{parse, Parser};
