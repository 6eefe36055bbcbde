use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns [`UtilsError::InvalidDigit`] for any value above 9.
#[inline]
pub fn validate_digit(digit: u8) -> Result<u8, UtilsError> {
    if digit > 9 {
        warn!("Rejecting out-of-range digit: {}", digit);
        return Err(UtilsError::InvalidDigit(digit));
    }
    Ok(digit)
}

/// # Errors
///
/// Returns [`UtilsError::InvalidDigit`] for the first value above 9.
pub fn validate_digits(digits: [u8; 4]) -> Result<[u8; 4], UtilsError> {
    for digit in digits {
        validate_digit(digit)?;
    }
    Ok(digits)
}

/// Read the first four characters of a batch record as digits.
///
/// Returns `Ok(None)` for records too short to hold four digits; such lines
/// are skipped rather than rejected.
///
/// # Errors
///
/// Returns [`UtilsError::InvalidDigitString`] when any of the first four
/// characters is not an ASCII digit.
pub fn parse_digit_record(record: &str) -> Result<Option<[u8; 4]>, UtilsError> {
    let trimmed = record.trim();
    let bytes = trimmed.as_bytes();

    let Some(head) = bytes.get(..4) else {
        debug!("Skipping short record: '{}'", trimmed);
        return Ok(None);
    };

    let mut digits = [0u8; 4];
    for (slot, &byte) in digits.iter_mut().zip(head) {
        if !byte.is_ascii_digit() {
            warn!("Record contains non-digit characters: '{}'", trimmed);
            return Err(UtilsError::InvalidDigitString(trimmed.to_string()));
        }
        *slot = byte - b'0';
    }

    Ok(Some(digits))
}
