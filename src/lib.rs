//! make10 - Every way to make 10 from four digits
//!
//! This library searches all groupings of four digits with `+ - * /` using
//! exact rational arithmetic, and packs the answers for all 715 digit
//! multisets into an immutable lookup table addressed by an order-independent
//! key.

pub mod batch;
pub mod export;
pub mod expression;
pub mod iterator;
pub mod solver;
pub mod table;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, Shape, ShapeSet};
pub use solver::{Make10Solver, SolverConfig, SolverError};
pub use table::{LookupTable, TableBuilder, TableError, TableQuery};
pub use utils::{CanonicalKey, UtilsError, canonical_key};

/// Find every expression over the four digits that evaluates to exactly 10
///
/// This is a convenience function that runs the search directly with the
/// default configuration. For repeated queries build a [`LookupTable`] once
/// and answer through [`TableQuery`]; both return the same sequence.
///
/// # Arguments
///
/// * `d1`..`d4` - Digits in `0..=9`, in any order
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Sorted, deduplicated expressions; empty when none exist
/// * `Err(SolverError)` - If any digit is outside `0..=9`
///
/// # Errors
///
/// This function will return an error if any digit is greater than 9.
///
/// # Examples
///
/// ```
/// use make10::solve;
///
/// let solutions = solve(9, 9, 9, 9).unwrap_or_default();
/// assert_eq!(solutions, vec!["((9*9)+9)/9"]);
///
/// assert!(solve(1, 2, 3, 10).is_err());
/// ```
pub fn solve(d1: u8, d2: u8, d3: u8, d4: u8) -> Result<Vec<String>, SolverError> {
    Make10Solver::default().solve_digits(d1, d2, d3, d4)
}
