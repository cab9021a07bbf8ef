use std::cmp::Ordering;

use crate::{expressions::Literal, TransformError::InterpretingError, TransformResult};

/// Order two non-null literals of the same kind. NaN sorts above every number.
pub fn cmp_impl(left: &Literal, right: &Literal) -> TransformResult<Ordering> {
    match (left, right) {
        (Literal::Number(l), Literal::Number(r)) => Ok(l.total_cmp(r)),
        (Literal::String(l), Literal::String(r)) => Ok(l.cmp(r)),
        (Literal::Bool(l), Literal::Bool(r)) => Ok(l.cmp(r)),
        (left, right) => Err(InterpretingError(format!(
            "cannot compare {left:?} and {right:?}"
        ))),
    }
}
