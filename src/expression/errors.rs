use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division leaves a remainder: {dividend} / {divisor}")]
    InexactDivision { dividend: u64, divisor: u64 },
    #[error("Negative intermediate result: {minuend} - {subtrahend}")]
    NegativeResult { minuend: u64, subtrahend: u64 },
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}
