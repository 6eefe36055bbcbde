pub mod constants;
mod core;
mod permutations;

pub use self::core::{CandidateIterator, iter_candidates, operators_for};
pub use permutations::distinct_permutations;
