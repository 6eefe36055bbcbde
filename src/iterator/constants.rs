// Configuration constants for the iterator module
pub const OPERATOR_COMBINATIONS: usize = 64;
pub const PERMUTATIONS_OF_FOUR: usize = 24;
