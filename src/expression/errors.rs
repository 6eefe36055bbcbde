use thiserror::Error;

/// Errors that can occur while evaluating a candidate expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
}
