use log::trace;

use crate::{
    datatable::Datatable,
    expressions::Literal,
    interpreter::{Evaluator, Value},
    scope::Scope,
    TransformError, TransformResult,
};

use super::{classifier::Classified, grouper::DimensionGroups, Role};

/// Evaluate every measure once per dimension group, scoped to that group's
/// rows with the full column catalogue. Output is aligned to the groups.
pub(crate) fn aggregate<E: Evaluator>(
    evaluator: &E,
    datatable: &Datatable,
    groups: &DimensionGroups,
    measures: &[&Classified],
) -> TransformResult<Vec<Vec<(Role, Literal)>>> {
    if measures.is_empty() {
        return Ok(vec![Vec::new(); groups.groups.len()]);
    }
    groups
        .groups
        .iter()
        .enumerate()
        .map(|(group, row_indices)| {
            let rows = row_indices.iter().map(|&idx| &datatable.rows[idx]);
            let scope = Scope::new(&datatable.columns, rows);
            let values = measures
                .iter()
                .map(|measure| evaluate_measure(evaluator, measure, &scope))
                .collect::<TransformResult<Vec<_>>>()?;
            trace!("group {group} ({} rows): {values:?}", row_indices.len());
            Ok(values)
        })
        .collect()
}

fn evaluate_measure<E: Evaluator>(
    evaluator: &E,
    measure: &Classified,
    scope: &Scope,
) -> TransformResult<(Role, Literal)> {
    match evaluator.eval(&measure.expression, scope)? {
        Value::Scalar(literal) => Ok((measure.role, literal)),
        Value::Column(_) => Err(TransformError::InterpretingError(format!(
            "measure `{}` must reduce to a single value",
            measure.expression
        ))),
    }
}
