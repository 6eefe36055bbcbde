use std::collections::BTreeSet;

use log::debug;
use num_rational::Rational64;

use crate::iterator::{distinct_permutations, iter_candidates};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::utils::validate_digits;

/// Finds every distinct expression over four digits that hits the target
#[derive(Debug, Clone, Default)]
pub struct Make10Solver {
    config: SolverConfig,
}

impl Make10Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// All expressions over `digits`, in any order, that equal the target.
    ///
    /// Digits are expected to be in `0..=9`; use [`Make10Solver::solve_digits`]
    /// for unchecked input. The result is sorted and free of duplicates, so it
    /// does not depend on the order the digits are given in.
    pub fn solve(&self, digits: [u8; 4]) -> Vec<String> {
        let target = Rational64::from_integer(self.config.target);
        let mut found = BTreeSet::new();

        for permutation in distinct_permutations(digits) {
            for (value, expr) in iter_candidates(permutation, self.config.shapes) {
                if value == target {
                    found.insert(expr.to_string());
                }
            }
        }

        debug!(
            "{:?} -> {} expressions equal to {}",
            digits,
            found.len(),
            self.config.target
        );
        found.into_iter().collect()
    }

    /// # Errors
    ///
    /// Returns [`SolverError::UtilsError`] when any digit is outside `0..=9`.
    pub fn solve_digits(&self, d1: u8, d2: u8, d3: u8, d4: u8) -> Result<Vec<String>, SolverError> {
        let digits = validate_digits([d1, d2, d3, d4])?;
        Ok(self.solve(digits))
    }
}
