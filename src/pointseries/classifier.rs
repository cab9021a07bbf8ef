use log::debug;

use crate::{
    data_types::DataType,
    datatable::Datatable,
    expressions::{Expression, Literal},
    interpreter::{Evaluator, Value},
    scope::Scope,
    TransformError, TransformResult,
};

use super::{ColumnInfo, ColumnRole, Role};

/// A role expression with its inferred column role and type.
#[derive(Debug, Clone)]
pub(crate) struct Classified {
    pub role: Role,
    pub expression: Expression,
    pub info: ColumnInfo,
}

impl Classified {
    pub fn is_dimension(&self) -> bool {
        self.info.role == ColumnRole::Dimension
    }
}

pub(crate) fn classify<E: Evaluator>(
    evaluator: &E,
    datatable: &Datatable,
    scope: &Scope,
    role: Role,
    text: &str,
) -> TransformResult<Classified> {
    let expression = evaluator.parse(text)?;
    let column_role = infer_role(evaluator, scope, text, &expression)?;
    let data_type = infer_type(datatable, &expression)?;
    debug!("{role} = `{text}` classified as {column_role:?} of type {data_type}");
    Ok(Classified {
        role,
        expression,
        info: ColumnInfo {
            data_type,
            role: column_role,
        },
    })
}

fn infer_role<E: Evaluator>(
    evaluator: &E,
    scope: &Scope,
    text: &str,
    expression: &Expression,
) -> TransformResult<ColumnRole> {
    match expression {
        Expression::FieldRef(_) => Ok(ColumnRole::Dimension),
        Expression::Function { .. } => Ok(ColumnRole::Measure),
        // numeric constants ignore the rows like any aggregation would; other
        // constants are a fixed dimension value
        Expression::Literal(_) => match evaluator.eval(expression, scope)? {
            Value::Scalar(Literal::Number(_)) => Ok(ColumnRole::Measure),
            _ => Ok(ColumnRole::Dimension),
        },
        _ => Err(TransformError::UnwrappedExpression(text.to_string())),
    }
}

/// A bare column reference has the column's type. Anything else has the one
/// type shared by every column it references, or `string` when there is not
/// exactly one such type.
fn infer_type(datatable: &Datatable, expression: &Expression) -> TransformResult<DataType> {
    if let Expression::FieldRef(name) = expression {
        return datatable.column_type(name);
    }
    let mut types = Vec::new();
    for symbol in expression.symbols() {
        let data_type = datatable.column_type(symbol)?;
        if !types.contains(&data_type) {
            types.push(data_type);
        }
    }
    match types.as_slice() {
        [data_type] => Ok(*data_type),
        _ => Ok(DataType::String),
    }
}
