use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Parsed form of a role expression.
///
/// Classification only cares about the top-level variant: a bare `FieldRef`
/// is a dimension, a `Function` call is a measure, a `Literal` depends on its
/// evaluated value and everything else is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    FieldRef(String),
    BinaryOp {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    UnaryOp {
        op: UnaryOp,
        input: Box<Expression>,
    },
    Function {
        name: String,
        args: Vec<Expression>,
    },
    Nested(Box<Expression>),
    Wildcard,
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(Literal::String(s)) => write!(f, "'{s}'"),
            Expression::Literal(l) => l.fmt(f),
            Expression::FieldRef(name) => name.fmt(f),
            Expression::BinaryOp { op, left, right } => {
                write!(f, "{left} {op} {right}")
            }
            Expression::UnaryOp { op, input } => write!(f, "{op}{input}"),
            Expression::Function { name, args } => write!(
                f,
                "{name}({})",
                args.iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Expression::Nested(inner) => write!(f, "({inner})"),
            Expression::Wildcard => "*".fmt(f),
        }
    }
}

impl Expression {
    /// Column names referenced anywhere inside this expression, in order of
    /// first appearance and without duplicates. Function names are not symbols.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols = Vec::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols<'a>(&'a self, symbols: &mut Vec<&'a str>) {
        match self {
            Expression::FieldRef(name) => {
                if !symbols.contains(&name.as_str()) {
                    symbols.push(name);
                }
            }
            Expression::BinaryOp { left, right, .. } => {
                left.collect_symbols(symbols);
                right.collect_symbols(symbols);
            }
            Expression::UnaryOp { input, .. } => input.collect_symbols(symbols),
            Expression::Function { args, .. } => {
                for arg in args {
                    arg.collect_symbols(symbols);
                }
            }
            Expression::Nested(inner) => inner.collect_symbols(symbols),
            Expression::Literal(_) | Expression::Wildcard => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::Plus => "+".fmt(f),
            BinaryOp::Minus => "-".fmt(f),
            BinaryOp::Multiply => "*".fmt(f),
            BinaryOp::Divide => "/".fmt(f),
            BinaryOp::Modulo => "%".fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Neg => "-".fmt(f),
        }
    }
}

/// A scalar cell value, read from and written to plain JSON scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    /// Bit pattern used for equality and hashing, so that literals can key
    /// groups: all zeros are one value and all NaNs are one value.
    fn number_bits(v: f64) -> u64 {
        if v.is_nan() {
            f64::NAN.to_bits()
        } else if v == 0.0 {
            0
        } else {
            v.to_bits()
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric coercion with the usual loose rules: `null` and blank text are
    /// zero, booleans are 0/1 and unparseable text is NaN. `Infinity` is the
    /// only spelling of infinity; `inf` or `nan` in text read as NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Literal::Null => 0.0,
            Literal::Bool(v) => f64::from(u8::from(*v)),
            Literal::Number(v) => *v,
            Literal::String(s) => match s.trim() {
                "" => 0.0,
                "Infinity" | "+Infinity" => f64::INFINITY,
                "-Infinity" => f64::NEG_INFINITY,
                trimmed
                    if trimmed
                        .bytes()
                        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) =>
                {
                    f64::NAN
                }
                trimmed => trimmed.parse::<f64>().unwrap_or(f64::NAN),
            },
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Number(l), Self::Number(r)) => {
                Self::number_bits(*l) == Self::number_bits(*r)
            }
            (Self::String(l), Self::String(r)) => l == r,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Literal::Null => {}
            Literal::Bool(v) => v.hash(state),
            Literal::Number(v) => Self::number_bits(*v).hash(state),
            Literal::String(v) => v.hash(state),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Null => "null".fmt(f),
            Literal::Bool(v) => v.fmt(f),
            Literal::Number(v) if v.is_nan() => "NaN".fmt(f),
            Literal::Number(v) if v.is_infinite() => {
                if v.is_sign_positive() {
                    "Infinity".fmt(f)
                } else {
                    "-Infinity".fmt(f)
                }
            }
            Literal::Number(v) => fmt_number(*v, f),
            Literal::String(v) => v.fmt(f),
        }
    }
}

/// Finite numbers print in full between 1e-6 and 1e21, in exponent form
/// (`1e+21`, `1.5e-7`) outside it, and zero prints without a sign.
fn fmt_number(v: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let magnitude = v.abs();
    if v == 0.0 {
        "0".fmt(f)
    } else if (1e-6..1e21).contains(&magnitude) {
        v.fmt(f)
    } else {
        let exponent = format!("{v:e}");
        match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => exponent.fmt(f),
        }
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Number(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::String(v.to_owned())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::String(v)
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}
