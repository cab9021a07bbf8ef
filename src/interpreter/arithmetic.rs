use crate::{
    expressions::{BinaryOp, Literal, UnaryOp},
    TransformError::InterpretingError,
    TransformResult,
};

fn numeric_binary_impl(
    op: BinaryOp,
    left: Literal,
    right: Literal,
    f: fn(f64, f64) -> f64,
) -> TransformResult<Literal> {
    match (left, right) {
        (Literal::Null, _) | (_, Literal::Null) => Ok(Literal::Null),
        (Literal::Number(l), Literal::Number(r)) => Ok(Literal::Number(f(l, r))),
        (left, right) => Err(InterpretingError(format!(
            "{op} operator not implemented for {left:?} and {right:?}"
        ))),
    }
}

fn numeric_unary_impl(
    name: &str,
    input: Literal,
    f: fn(f64) -> f64,
) -> TransformResult<Literal> {
    match input {
        Literal::Null => Ok(Literal::Null),
        Literal::Number(v) => Ok(Literal::Number(f(v))),
        input => Err(InterpretingError(format!(
            "{name} not implemented for {input:?}"
        ))),
    }
}

pub fn binary_impl(op: BinaryOp, left: Literal, right: Literal) -> TransformResult<Literal> {
    match op {
        BinaryOp::Plus => plus_impl(left, right),
        BinaryOp::Minus => minus_impl(left, right),
        BinaryOp::Multiply => multiply_impl(left, right),
        BinaryOp::Divide => divide_impl(left, right),
        BinaryOp::Modulo => modulo_impl(left, right),
    }
}

pub fn plus_impl(left: Literal, right: Literal) -> TransformResult<Literal> {
    numeric_binary_impl(BinaryOp::Plus, left, right, |l, r| l + r)
}

pub fn minus_impl(left: Literal, right: Literal) -> TransformResult<Literal> {
    numeric_binary_impl(BinaryOp::Minus, left, right, |l, r| l - r)
}

pub fn multiply_impl(left: Literal, right: Literal) -> TransformResult<Literal> {
    numeric_binary_impl(BinaryOp::Multiply, left, right, |l, r| l * r)
}

pub fn divide_impl(left: Literal, right: Literal) -> TransformResult<Literal> {
    numeric_binary_impl(BinaryOp::Divide, left, right, |l, r| l / r)
}

pub fn modulo_impl(left: Literal, right: Literal) -> TransformResult<Literal> {
    numeric_binary_impl(BinaryOp::Modulo, left, right, |l, r| l % r)
}

pub fn negative_impl(input: Literal) -> TransformResult<Literal> {
    numeric_unary_impl(&UnaryOp::Neg.to_string(), input, |v| -v)
}

pub fn abs_impl(input: Literal) -> TransformResult<Literal> {
    numeric_unary_impl("abs", input, f64::abs)
}

pub fn round_impl(input: Literal) -> TransformResult<Literal> {
    numeric_unary_impl("round", input, f64::round)
}

pub fn floor_impl(input: Literal) -> TransformResult<Literal> {
    numeric_unary_impl("floor", input, f64::floor)
}

pub fn ceil_impl(input: Literal) -> TransformResult<Literal> {
    numeric_unary_impl("ceil", input, f64::ceil)
}

pub fn sqrt_impl(input: Literal) -> TransformResult<Literal> {
    numeric_unary_impl("sqrt", input, f64::sqrt)
}
