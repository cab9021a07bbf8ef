mod arithmetic;
mod comparison;

use crate::{
    expressions::{Expression, Literal, UnaryOp},
    functions::{Function, FunctionsRegistry},
    parser::parse_expression,
    scope::Scope,
    TransformError, TransformResult,
};

pub(crate) use self::arithmetic::{
    abs_impl, ceil_impl, divide_impl, floor_impl, minus_impl, multiply_impl, plus_impl,
    round_impl, sqrt_impl,
};
use self::arithmetic::{binary_impl, negative_impl};
pub use self::comparison::cmp_impl;

/// Result of evaluating an expression against a scope: either one value, or
/// one value per scope row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Literal),
    Column(Vec<Literal>),
}

impl Value {
    /// The values an aggregation folds over; a scalar is a one-value column.
    pub fn literals(&self) -> &[Literal] {
        match self {
            Value::Scalar(literal) => std::slice::from_ref(literal),
            Value::Column(literals) => literals,
        }
    }

    /// Value for the row at `index`. Scalars apply to every row.
    pub fn at(&self, index: usize) -> Option<&Literal> {
        match self {
            Value::Scalar(literal) => Some(literal),
            Value::Column(literals) => literals.get(index),
        }
    }

    fn map(self, f: fn(Literal) -> TransformResult<Literal>) -> TransformResult<Value> {
        match self {
            Value::Scalar(literal) => f(literal).map(Value::Scalar),
            Value::Column(literals) => literals
                .into_iter()
                .map(f)
                .collect::<TransformResult<Vec<_>>>()
                .map(Value::Column),
        }
    }

    fn zip_with<F>(self, other: Value, f: F) -> TransformResult<Value>
    where
        F: Fn(Literal, Literal) -> TransformResult<Literal>,
    {
        match (self, other) {
            (Value::Scalar(l), Value::Scalar(r)) => f(l, r).map(Value::Scalar),
            (Value::Column(ls), Value::Scalar(r)) => ls
                .into_iter()
                .map(|l| f(l, r.clone()))
                .collect::<TransformResult<Vec<_>>>()
                .map(Value::Column),
            (Value::Scalar(l), Value::Column(rs)) => rs
                .into_iter()
                .map(|r| f(l.clone(), r))
                .collect::<TransformResult<Vec<_>>>()
                .map(Value::Column),
            (Value::Column(ls), Value::Column(rs)) => {
                if ls.len() != rs.len() {
                    return Err(TransformError::InterpretingError(format!(
                        "cannot combine columns of length {} and {}",
                        ls.len(),
                        rs.len()
                    )));
                }
                Iterator::zip(ls.into_iter(), rs.into_iter())
                    .map(|(l, r)| f(l, r))
                    .collect::<TransformResult<Vec<_>>>()
                    .map(Value::Column)
            }
        }
    }
}

/// Parses and evaluates role expressions.
pub trait Evaluator {
    fn parse(&self, expression: &str) -> TransformResult<Expression>;

    fn eval(&self, expression: &Expression, scope: &Scope) -> TransformResult<Value>;
}

/// Default [`Evaluator`], resolving function calls through a [`FunctionsRegistry`].
#[derive(Debug, Default)]
pub struct Interpreter {
    functions: FunctionsRegistry,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_functions(functions: FunctionsRegistry) -> Self {
        Self { functions }
    }

    pub fn functions(&self) -> &FunctionsRegistry {
        &self.functions
    }

    fn eval_function(
        &self,
        name: &str,
        args: &[Expression],
        scope: &Scope,
    ) -> TransformResult<Value> {
        let function = self
            .functions
            .get_function(name)
            .ok_or_else(|| TransformError::FunctionNotFound(name.to_string()))?;
        match function {
            Function::Aggregate(builder) => {
                if name.eq_ignore_ascii_case("count") && matches!(args, [Expression::Wildcard]) {
                    return Ok(Value::Scalar(Literal::Number(scope.row_count() as f64)));
                }
                let [arg] = args else {
                    return Err(invalid_args(name, 1, args.len()));
                };
                let input = self.eval(arg, scope)?;
                let mut aggregator = builder();
                for literal in input.literals() {
                    aggregator.process(literal)?;
                }
                aggregator.result().map(Value::Scalar)
            }
            Function::Map(f) => {
                let [arg] = args else {
                    return Err(invalid_args(name, 1, args.len()));
                };
                self.eval(arg, scope)?.map(f)
            }
            Function::Zip(f) => {
                let [left, right] = args else {
                    return Err(invalid_args(name, 2, args.len()));
                };
                let left = self.eval(left, scope)?;
                left.zip_with(self.eval(right, scope)?, f)
            }
        }
    }
}

fn invalid_args(name: &str, expected: usize, actual: usize) -> TransformError {
    TransformError::InterpretingError(format!(
        "{name}() takes {expected} argument(s) but {actual} were given"
    ))
}

impl Evaluator for Interpreter {
    fn parse(&self, expression: &str) -> TransformResult<Expression> {
        parse_expression(expression)
    }

    fn eval(&self, expression: &Expression, scope: &Scope) -> TransformResult<Value> {
        match expression {
            Expression::Literal(l) => Ok(Value::Scalar(l.clone())),
            Expression::FieldRef(name) => scope
                .column(name)
                .map(|values| Value::Column(values.to_vec()))
                .ok_or_else(|| TransformError::ColumnNotFound(name.to_string())),
            Expression::Nested(inner) => self.eval(inner, scope),
            Expression::BinaryOp { op, left, right } => {
                let left = self.eval(left, scope)?;
                left.zip_with(self.eval(right, scope)?, |l, r| binary_impl(*op, l, r))
            }
            Expression::UnaryOp { op, input } => match op {
                UnaryOp::Neg => self.eval(input, scope)?.map(negative_impl),
            },
            Expression::Function { name, args } => self.eval_function(name, args, scope),
            Expression::Wildcard => Err(TransformError::InterpretingError(
                "`*` is only supported as count(*)".to_string(),
            )),
        }
    }
}
