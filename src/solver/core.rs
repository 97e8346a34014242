use log::{debug, info};
use rayon::prelude::*;

use crate::expression::Expression;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::explorer::Explorer;
use crate::utils::validate_numbers;

/// Outcome of a solve request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// An expression using every input exactly once that evaluates to the target
    Found(Expression),
    NotFound,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found(_))
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Solution::Found(expr) => Some(expr),
            Solution::NotFound => None,
        }
    }
}

/// Solver for the numbers game
pub struct NumbersSolver {
    config: SolverConfig,
}

impl NumbersSolver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find an expression that uses each of `numbers` exactly once and evaluates to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more numbers than the configured limit or
    /// if the numbers are large enough to overflow during the search.
    pub fn solve(&self, numbers: &[u64], target: u64) -> Result<Solution, SolverError> {
        validate_numbers(numbers, self.config.max_numbers)?;
        search(numbers, target)
    }

    /// Solve several targets for the same numbers in parallel.
    ///
    /// Results are returned in the order of `targets`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`NumbersSolver::solve`]; checked once up front.
    pub fn solve_all(
        &self,
        numbers: &[u64],
        targets: &[u64],
    ) -> Result<Vec<Solution>, SolverError> {
        validate_numbers(numbers, self.config.max_numbers)?;
        info!("Solving {} targets in parallel", targets.len());

        targets
            .par_iter()
            .map(|&target| search(numbers, target))
            .collect()
    }
}

impl Default for NumbersSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn search(numbers: &[u64], target: u64) -> Result<Solution, SolverError> {
    info!("Searching for {} using all of {:?}", target, numbers);

    let mut explorer = Explorer::new(numbers, target)?;
    let reached = explorer.run();
    debug!("{:?}", explorer.stats());

    match reached.and_then(|key| explorer.witness(key)) {
        Some(expr) => {
            info!("Found {} = {}", expr, target);
            Ok(Solution::Found(expr))
        }
        None => {
            info!("No expression reaches {}", target);
            Ok(Solution::NotFound)
        }
    }
}
