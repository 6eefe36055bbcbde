use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit must be in 0..=9, got {0}")]
    InvalidDigit(u8),
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
