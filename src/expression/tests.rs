use num_rational::Rational64;

use crate::expression::{Expression, ExpressionError, Operator, Shape, ShapeSet, apply};

fn ratio(numer: i64, denom: i64) -> Rational64 {
    Rational64::new(numer, denom)
}

#[test]
fn test_apply_is_exact() {
    let third = apply(Operator::Div, ratio(1, 1), ratio(3, 1));
    assert_eq!(third, Ok(ratio(1, 3)));

    // 1/3 * 3 must be exactly one, not 0.999...
    if let Ok(third) = third {
        assert_eq!(apply(Operator::Mul, third, ratio(3, 1)), Ok(ratio(1, 1)));
    }
}

#[test]
fn test_apply_division_by_zero() {
    let result = apply(Operator::Div, ratio(7, 1), ratio(0, 1));
    assert_eq!(result, Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_apply_zero_numerator_divides() {
    let result = apply(Operator::Div, ratio(0, 1), ratio(7, 1));
    assert_eq!(result, Ok(ratio(0, 1)));
}

#[test]
fn test_apply_add_sub_mul() {
    assert_eq!(apply(Operator::Add, ratio(1, 2), ratio(1, 3)), Ok(ratio(5, 6)));
    assert_eq!(apply(Operator::Sub, ratio(1, 2), ratio(1, 3)), Ok(ratio(1, 6)));
    assert_eq!(apply(Operator::Mul, ratio(2, 3), ratio(9, 4)), Ok(ratio(3, 2)));
}

#[test]
fn test_left_nested_evaluation() {
    let expr = Expression::new(
        [1, 7, 4, 5],
        [Operator::Add, Operator::Div, Operator::Mul],
        Shape::LeftNested,
    );
    assert_eq!(expr.evaluate(), Ok(ratio(10, 1)));
    assert_eq!(expr.to_string(), "((1+7)/4)*5");
}

#[test]
fn test_paired_evaluation() {
    // o1 joins the left pair, o2 the right pair, o3 is the root
    let expr = Expression::new(
        [7, 5, 4, 1],
        [Operator::Sub, Operator::Add, Operator::Mul],
        Shape::Paired,
    );
    assert_eq!(expr.evaluate(), Ok(ratio(10, 1)));
    assert_eq!(expr.to_string(), "(7-5)*(4+1)");
}

#[test]
fn test_extended_shapes_render_and_evaluate() {
    let inner_left = Expression::new(
        [3, 7, 4, 8],
        [Operator::Div, Operator::Sub, Operator::Mul],
        Shape::InnerLeft,
    );
    assert_eq!(inner_left.to_string(), "(3-(7/4))*8");
    assert_eq!(inner_left.evaluate(), Ok(ratio(10, 1)));

    let right_nested = Expression::new(
        [8, 3, 7, 4],
        [Operator::Div, Operator::Sub, Operator::Mul],
        Shape::RightNested,
    );
    assert_eq!(right_nested.to_string(), "8*(3-(7/4))");
    assert_eq!(right_nested.evaluate(), Ok(ratio(10, 1)));

    let inner_right = Expression::new(
        [2, 9, 5, 1],
        [Operator::Sub, Operator::Add, Operator::Mul],
        Shape::InnerRight,
    );
    assert_eq!(inner_right.to_string(), "2*((9-5)+1)");
    assert_eq!(inner_right.evaluate(), Ok(ratio(10, 1)));
}

#[test]
fn test_intermediate_division_by_zero_short_circuits() {
    // (3-3) is zero, so 5/(3-3) fails before the root is reached
    let expr = Expression::new(
        [5, 3, 3, 1],
        [Operator::Sub, Operator::Div, Operator::Add],
        Shape::InnerLeft,
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));

    let paired = Expression::new(
        [1, 0, 2, 2],
        [Operator::Div, Operator::Sub, Operator::Add],
        Shape::Paired,
    );
    assert_eq!(paired.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_shape_sets() {
    assert_eq!(ShapeSet::Classic.shapes(), &[Shape::LeftNested, Shape::Paired]);
    assert_eq!(ShapeSet::Extended.shapes().len(), 5);
    assert_eq!(ShapeSet::default(), ShapeSet::Classic);
}

#[test]
fn test_operator_symbols() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-*/");
}
