use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse a command-line digit string such as `"1457"` into four digits.
///
/// # Errors
///
/// Returns an error if the string is not exactly four ASCII digits.
pub fn validate_digit_string(digit_string: &str) -> Result<[u8; 4], UtilsError> {
    debug!("Validating digit string: '{}'", digit_string);

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    let bytes = digit_string.as_bytes();
    let digits: [u8; 4] = bytes.try_into().map_err(|_| {
        warn!("Digit string has wrong length: '{}'", digit_string);
        UtilsError::InvalidLength {
            expected: 4,
            actual: bytes.len(),
        }
    })?;

    debug!("Digit string validation successful");
    Ok(digits.map(|byte| byte - b'0'))
}
