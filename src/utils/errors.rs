use thiserror::Error;

/// Errors that can occur while reading or validating solver input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("No numbers given")]
    EmptyNumbers,
    #[error("Not an integer: '{0}'")]
    InvalidNumber(String),
    #[error("Negative numbers are not supported: {0}")]
    NegativeNumber(i64),
    #[error("Too many numbers: {count} given, at most {max} supported")]
    TooManyNumbers { count: usize, max: usize },
    #[error("Numbers are too large: intermediate values could overflow 64 bits")]
    MagnitudeOverflow,
}
