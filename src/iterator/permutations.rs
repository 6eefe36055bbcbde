use std::collections::BTreeSet;

use log::debug;

use super::constants::PERMUTATIONS_OF_FOUR;

/// Every ordering of four positions, in lexicographic order
const ORDERINGS: [[usize; 4]; PERMUTATIONS_OF_FOUR] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 2, 1, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 2, 3, 0],
    [1, 3, 0, 2],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 0, 3, 1],
    [2, 1, 0, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 1, 2, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

/// Distinct orderings of the digits; repeated digits collapse.
pub fn distinct_permutations(digits: [u8; 4]) -> Vec<[u8; 4]> {
    let unique: BTreeSet<[u8; 4]> = ORDERINGS
        .iter()
        .map(|&order| order.map(|position| digits[position]))
        .collect();

    debug!(
        "{:?} has {} distinct permutations",
        digits,
        unique.len()
    );
    unique.into_iter().collect()
}
