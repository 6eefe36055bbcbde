use std::fmt;

use crate::expression::ast::{Expression, Shape};

/// Fully parenthesized, no spaces: `((1+7)/4)*5`, `(7-5)*(4+1)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.digits;
        let [o1, o2, o3] = self.operators.map(|op| op.symbol());

        match self.shape {
            Shape::LeftNested => write!(f, "(({a}{o1}{b}){o2}{c}){o3}{d}"),
            Shape::Paired => write!(f, "({a}{o1}{b}){o3}({c}{o2}{d})"),
            Shape::InnerLeft => write!(f, "({a}{o2}({b}{o1}{c})){o3}{d}"),
            Shape::InnerRight => write!(f, "{a}{o3}(({b}{o1}{c}){o2}{d})"),
            Shape::RightNested => write!(f, "{a}{o3}({b}{o2}({c}{o1}{d}))"),
        }
    }
}
