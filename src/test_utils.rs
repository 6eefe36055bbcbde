//! Helpers shared by unit tests

use num_rational::Rational64;
use num_traits::Zero;

/// Evaluate a rendered expression such as `(7-5)*(4+1)` exactly.
///
/// Returns `None` for malformed text or a division by zero.
pub fn evaluate_rendered(text: &str) -> Option<Rational64> {
    let mut parser = Parser {
        bytes: text.as_bytes(),
        pos: 0,
    };
    let value = parser.expr()?;
    (parser.pos == parser.bytes.len()).then_some(value)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expr(&mut self) -> Option<Rational64> {
        let mut value = self.term()?;
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == b'+' { value + rhs } else { value - rhs };
        }
        Some(value)
    }

    fn term(&mut self) -> Option<Rational64> {
        let mut value = self.atom()?;
        while let Some(op @ (b'*' | b'/')) = self.peek() {
            self.pos += 1;
            let rhs = self.atom()?;
            if op == b'*' {
                value = value * rhs;
            } else if rhs.is_zero() {
                return None;
            } else {
                value = value / rhs;
            }
        }
        Some(value)
    }

    fn atom(&mut self) -> Option<Rational64> {
        match self.peek()? {
            b'(' => {
                self.pos += 1;
                let value = self.expr()?;
                if self.peek()? != b')' {
                    return None;
                }
                self.pos += 1;
                Some(value)
            }
            digit @ b'0'..=b'9' => {
                self.pos += 1;
                Some(Rational64::from_integer(i64::from(digit - b'0')))
            }
            _ => None,
        }
    }
}
