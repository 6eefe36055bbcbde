//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Operator, Shape, ShapeSet};
pub use errors::ExpressionError;
pub use eval::apply;

#[cfg(test)]
mod tests;
