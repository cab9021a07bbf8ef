use indexmap::IndexMap;
use log::debug;

use crate::{
    datatable::{Datatable, RowId},
    expressions::Literal,
    interpreter::Evaluator,
    scope::Scope,
    TransformError, TransformResult,
};

use super::{classifier::Classified, Role};

/// Identity and normalized dimension values of one input row.
#[derive(Debug)]
pub(crate) struct DimensionRecord<'a> {
    pub row_id: &'a RowId,
    /// index into [`DimensionGroups::groups`]
    pub group: usize,
    pub values: Vec<(Role, Literal)>,
}

#[derive(Debug)]
pub(crate) struct DimensionGroups<'a> {
    /// one record per input row, in row order
    pub records: Vec<DimensionRecord<'a>>,
    /// row indices of each group, groups in order of first appearance
    pub groups: Vec<Vec<usize>>,
}

/// Partition rows by their tuple of raw dimension values. Without dimensions
/// every row lands in one group.
pub(crate) fn group_rows<'a, E: Evaluator>(
    evaluator: &E,
    datatable: &'a Datatable,
    scope: &Scope,
    dimensions: &[&Classified],
) -> TransformResult<DimensionGroups<'a>> {
    let evaluated = dimensions
        .iter()
        .map(|dimension| evaluator.eval(&dimension.expression, scope))
        .collect::<TransformResult<Vec<_>>>()?;

    let mut groups: IndexMap<Vec<Literal>, Vec<usize>> = IndexMap::new();
    let mut records = Vec::with_capacity(datatable.rows.len());
    for (idx, row) in datatable.rows.iter().enumerate() {
        let key = Iterator::zip(dimensions.iter(), evaluated.iter())
            .map(|(dimension, value)| {
                value.at(idx).cloned().ok_or_else(|| {
                    TransformError::InterpretingError(format!(
                        "dimension `{}` has no value for row {}",
                        dimension.expression, row.row_id
                    ))
                })
            })
            .collect::<TransformResult<Vec<_>>>()?;
        let values = Iterator::zip(dimensions.iter(), key.iter())
            .map(|(dimension, raw)| {
                (dimension.role, dimension.info.data_type.normalize(raw.clone()))
            })
            .collect();

        let entry = groups.entry(key);
        let group = entry.index();
        entry.or_default().push(idx);
        records.push(DimensionRecord {
            row_id: &row.row_id,
            group,
            values,
        });
    }

    debug!(
        "grouped {} rows into {} dimension groups",
        records.len(),
        groups.len()
    );
    Ok(DimensionGroups {
        records,
        groups: groups.into_values().collect(),
    })
}
