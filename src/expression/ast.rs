use serde::{Deserialize, Serialize};

/// The four binary operators a candidate may combine digits with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// Binary tree shapes over four ordered leaves `a b c d`.
///
/// The three operators of an [`Expression`] are named by evaluation order:
/// `o1` is applied first and `o3` is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `((a o1 b) o2 c) o3 d`
    LeftNested,
    /// `(a o1 b) o3 (c o2 d)`
    Paired,
    /// `(a o2 (b o1 c)) o3 d`
    InnerLeft,
    /// `a o3 ((b o1 c) o2 d)`
    InnerRight,
    /// `a o3 (b o2 (c o1 d))`
    RightNested,
}

/// Which shapes the search explores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeSet {
    /// Left-nested and paired only
    #[default]
    Classic,
    /// Every binary tree over four leaves
    Extended,
}

impl ShapeSet {
    pub fn shapes(self) -> &'static [Shape] {
        match self {
            ShapeSet::Classic => &[Shape::LeftNested, Shape::Paired],
            ShapeSet::Extended => &[
                Shape::LeftNested,
                Shape::Paired,
                Shape::InnerLeft,
                Shape::InnerRight,
                Shape::RightNested,
            ],
        }
    }
}

/// One candidate grouping of four ordered digits and three operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expression {
    pub digits: [u8; 4],
    pub operators: [Operator; 3],
    pub shape: Shape,
}

impl Expression {
    pub fn new(digits: [u8; 4], operators: [Operator; 3], shape: Shape) -> Self {
        Self {
            digits,
            operators,
            shape,
        }
    }
}
