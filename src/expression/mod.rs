//! Expression trees built by the solver, with rendering, evaluation and parsing

mod ast;
mod display;
mod errors;
mod eval;
mod operator;
mod parse;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use operator::Operator;
