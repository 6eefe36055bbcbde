use num_rational::Rational64;

use crate::expression::{Expression, Operator, Shape, ShapeSet};

use super::constants::OPERATOR_COMBINATIONS;

/// Operator triple number `index` (0..64), ordered like nested loops over
/// `+ - * /` with `o1` outermost.
#[inline]
pub fn operators_for(index: usize) -> [Operator; 3] {
    let pick = |i: usize| Operator::ALL[i % Operator::ALL.len()];
    [pick(index / 16), pick(index / 4), pick(index)]
}

/// Lazily evaluates every candidate for one ordered digit tuple.
///
/// Yields `(value, expression)` for candidates that evaluate; a candidate that
/// divides by zero anywhere is skipped silently.
#[derive(Debug, Clone)]
pub struct CandidateIterator {
    digits: [u8; 4],
    shapes: &'static [Shape],
    combination: usize,
    shape_idx: usize,
}

impl CandidateIterator {
    pub fn new(digits: [u8; 4], shape_set: ShapeSet) -> Self {
        Self {
            digits,
            shapes: shape_set.shapes(),
            combination: 0,
            shape_idx: 0,
        }
    }

    /// Number of candidates the iterator visits, failed ones included
    pub fn candidate_count(&self) -> usize {
        OPERATOR_COMBINATIONS * self.shapes.len()
    }
}

impl Iterator for CandidateIterator {
    type Item = (Rational64, Expression);

    fn next(&mut self) -> Option<Self::Item> {
        while self.combination < OPERATOR_COMBINATIONS {
            let Some(&shape) = self.shapes.get(self.shape_idx) else {
                self.shape_idx = 0;
                self.combination += 1;
                continue;
            };
            self.shape_idx += 1;

            let expr = Expression::new(self.digits, operators_for(self.combination), shape);
            if let Ok(value) = expr.evaluate() {
                return Some((value, expr));
            }
        }
        None
    }
}

pub fn iter_candidates(digits: [u8; 4], shape_set: ShapeSet) -> CandidateIterator {
    CandidateIterator::new(digits, shape_set)
}
