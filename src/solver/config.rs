use crate::solver::constants::{MASK_BITS, MAX_NUMBERS};

/// Configuration for a solver instance
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Largest accepted input list. Capped at the mask width.
    pub max_numbers: usize,
}

impl SolverConfig {
    pub fn with_max_numbers(max_numbers: usize) -> Self {
        Self {
            max_numbers: max_numbers.min(MASK_BITS),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_numbers: MAX_NUMBERS,
        }
    }
}
