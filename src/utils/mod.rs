//! Utils module split into submodules

mod digits;
mod errors;
mod key;
mod validation;

pub use digits::{parse_digit_record, validate_digit, validate_digits};
pub use errors::UtilsError;
pub use key::{CanonicalKey, MAX_KEY, SORTING_NETWORK, TABLE_SLOTS, canonical_key, sort4};
pub use validation::validate_digit_string;
