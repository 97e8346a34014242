use log::{debug, warn};

use crate::utils::errors::UtilsError;

fn parse_integer(token: &str) -> Result<u64, UtilsError> {
    let value = token
        .parse::<i64>()
        .map_err(|_| UtilsError::InvalidNumber(token.to_string()))?;
    u64::try_from(value).map_err(|_| {
        warn!("Rejecting negative number {}", value);
        UtilsError::NegativeNumber(value)
    })
}

/// Parse a whitespace separated list of non-negative integers.
///
/// # Errors
///
/// Returns an error if the line holds no numbers, or if any token is not an
/// integer or is negative.
pub fn parse_numbers(line: &str) -> Result<Vec<u64>, UtilsError> {
    let numbers = line
        .split_whitespace()
        .map(parse_integer)
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        warn!("No numbers found in input line");
        return Err(UtilsError::EmptyNumbers);
    }

    debug!("Parsed numbers: {:?}", numbers);
    Ok(numbers)
}

/// Parse a single non-negative target value.
///
/// # Errors
///
/// Returns an error if the trimmed line is not a non-negative integer.
pub fn parse_target(line: &str) -> Result<u64, UtilsError> {
    parse_integer(line.trim())
}
