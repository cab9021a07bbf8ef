use std::collections::HashSet;

use log::{debug, trace};

use crate::expressions::Literal;

use super::{grouper::DimensionGroups, Point, Role};

/// Join each row's dimension values with its group's measures and keep the
/// first point of every distinct content, in row order.
pub(crate) fn assemble(
    groups: &DimensionGroups,
    measure_values: &[Vec<(Role, Literal)>],
) -> Vec<Point> {
    let mut seen: HashSet<Vec<(Role, Literal)>> = HashSet::new();
    let mut points = Vec::new();
    for record in &groups.records {
        let content: Vec<(Role, Literal)> = record
            .values
            .iter()
            .chain(measure_values[record.group].iter())
            .cloned()
            .collect();
        if seen.contains(&content) {
            trace!("row {} collapses into an earlier point", record.row_id);
            continue;
        }
        points.push(content.iter().cloned().collect::<Point>());
        seen.insert(content);
    }
    debug!(
        "{} rows deduplicated into {} points",
        groups.records.len(),
        points.len()
    );
    points
}
