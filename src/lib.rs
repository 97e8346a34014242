//! Numbers game solver
//!
//! Given a list of non-negative integers and a target, find an arithmetic
//! expression that uses every number exactly once, combined with `+`, `-`, `*`
//! and exact integer `/`, and evaluates to the target.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{NumbersSolver, Solution, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_numbers, parse_target};

/// Find an expression using each of `numbers` exactly once that evaluates to `target`
///
/// This is a convenience function that solves with the default configuration.
///
/// # Returns
///
/// * `Ok(Solution::Found(expr))` - If a matching expression exists
/// * `Ok(Solution::NotFound)` - If no expression using every number reaches the target
/// * `Err(SolverError)` - If the input is too large to search safely
///
/// # Errors
///
/// This function will return an error if:
/// * More than the default maximum number of inputs are given
/// * The inputs are large enough that an intermediate value could overflow `u64`
///
/// # Examples
///
/// ```
/// use numbers_game::{Solution, solve};
///
/// match solve(&[2, 3], 5) {
///     Ok(Solution::Found(expr)) => assert_eq!(expr.to_string(), "(2+3)"),
///     Ok(Solution::NotFound) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[u64], target: u64) -> Result<Solution, SolverError> {
    NumbersSolver::new().solve(numbers, target)
}
