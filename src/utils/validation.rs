use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Upper bound on every value the four operators can reach from `numbers`.
///
/// Each combination of `a` and `b` stays at or below `max(a, 2) * max(b, 2)`,
/// so the product of `max(v, 2)` over all inputs bounds the whole search.
/// Returns `None` if that product does not fit in `u64`.
pub fn value_bound(numbers: &[u64]) -> Option<u64> {
    numbers
        .iter()
        .try_fold(1u64, |acc, &n| acc.checked_mul(n.max(2)))
}

/// # Errors
///
/// Returns an error if there are more than `max_numbers` inputs, or if the
/// inputs are large enough that an intermediate value could overflow `u64`.
pub fn validate_numbers(numbers: &[u64], max_numbers: usize) -> Result<(), UtilsError> {
    debug!("Validating {} input numbers", numbers.len());

    if numbers.len() > max_numbers {
        warn!(
            "Too many numbers: {} given, limit is {}",
            numbers.len(),
            max_numbers
        );
        return Err(UtilsError::TooManyNumbers {
            count: numbers.len(),
            max: max_numbers,
        });
    }

    match value_bound(numbers) {
        Some(bound) => {
            debug!("Reachable values are bounded by {}", bound);
            Ok(())
        }
        None => {
            warn!("Input magnitude could overflow: {:?}", numbers);
            Err(UtilsError::MagnitudeOverflow)
        }
    }
}
