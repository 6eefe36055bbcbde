//! Record-at-a-time answers in the `<record> -> [<solutions>]` format

use crate::table::{TableError, TableQuery};
use crate::utils::parse_digit_record;

/// Answer one input record.
///
/// Returns `Ok(None)` for records shorter than four characters, which are
/// skipped.
///
/// # Errors
///
/// Returns [`TableError::UtilsError`] when the record's first four characters
/// are not all digits.
pub fn answer_line(query: &TableQuery<'_>, record: &str) -> Result<Option<String>, TableError> {
    let Some([d1, d2, d3, d4]) = parse_digit_record(record)? else {
        return Ok(None);
    };
    let solutions = query.solve(d1, d2, d3, d4)?;
    Ok(Some(format!("{} -> [{}]", record.trim(), solutions.join(", "))))
}
