use log::trace;
use num_rational::Rational64;
use num_traits::Zero;

use crate::expression::ast::{Expression, Operator, Shape};
use crate::expression::errors::ExpressionError;

/// Apply one operator to two exact operands.
///
/// Intermediate values stay within |9^4| with denominators of at most 9^3,
/// so `i64` numerators and denominators never overflow.
///
/// # Errors
///
/// Returns [`ExpressionError::DivisionByZero`] when dividing by an exact zero.
#[inline]
pub fn apply(op: Operator, lhs: Rational64, rhs: Rational64) -> Result<Rational64, ExpressionError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div => {
            if rhs.is_zero() {
                trace!("Division by zero: {} / {}", lhs, rhs);
                Err(ExpressionError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
    }
}

impl Expression {
    /// Evaluate the expression exactly, in `o1`, `o2`, `o3` order.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as any step divides by zero.
    pub fn evaluate(&self) -> Result<Rational64, ExpressionError> {
        let [a, b, c, d] = self
            .digits
            .map(|digit| Rational64::from_integer(i64::from(digit)));
        let [o1, o2, o3] = self.operators;

        match self.shape {
            Shape::LeftNested => {
                let first = apply(o1, a, b)?;
                let second = apply(o2, first, c)?;
                apply(o3, second, d)
            }
            Shape::Paired => {
                let left = apply(o1, a, b)?;
                let right = apply(o2, c, d)?;
                apply(o3, left, right)
            }
            Shape::InnerLeft => {
                let first = apply(o1, b, c)?;
                let second = apply(o2, a, first)?;
                apply(o3, second, d)
            }
            Shape::InnerRight => {
                let first = apply(o1, b, c)?;
                let second = apply(o2, first, d)?;
                apply(o3, a, second)
            }
            Shape::RightNested => {
                let first = apply(o1, c, d)?;
                let second = apply(o2, b, first)?;
                apply(o3, a, second)
            }
        }
    }
}
