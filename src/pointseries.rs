//! Turns a datatable into a point series model.
//!
//! Dimension expressions are combined into a grouping key per row. Measure
//! expressions are evaluated once per group, against that group's rows only.
//! Rows are then merged with their group's measures and deduplicated, since
//! two points cannot occupy the same place.
//!
//! ```text
//! classify args -> group rows by dimension tuple -> aggregate measures per group
//!               -> merge + dedup -> PointSeries
//! ```

mod assembler;
mod classifier;
mod grouper;
mod measures;

use std::fmt::Display;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    data_types::DataType,
    datatable::Datatable,
    expressions::Literal,
    interpreter::{Evaluator, Interpreter},
    scope::Scope,
    TransformResult,
};

use self::classifier::Classified;

/// Named argument slot of the transform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    X,
    Color,
    Y,
    Size,
}

impl Role {
    /// Processing order of the argument slots.
    pub const ALL: [Role; 4] = [Role::X, Role::Color, Role::Y, Role::Size];
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::X => "x".fmt(f),
            Role::Color => "color".fmt(f),
            Role::Y => "y".fmt(f),
            Role::Size => "size".fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    Dimension,
    Measure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    #[serde(rename = "type")]
    pub data_type: DataType,
    pub role: ColumnRole,
}

/// Role expressions. Absent or empty expressions are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSeriesArgs {
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl PointSeriesArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, expression: impl Into<String>) -> Self {
        self.x = Some(expression.into());
        self
    }

    pub fn color(mut self, expression: impl Into<String>) -> Self {
        self.color = Some(expression.into());
        self
    }

    pub fn y(mut self, expression: impl Into<String>) -> Self {
        self.y = Some(expression.into());
        self
    }

    pub fn size(mut self, expression: impl Into<String>) -> Self {
        self.size = Some(expression.into());
        self
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        let expression = match role {
            Role::X => &self.x,
            Role::Color => &self.color,
            Role::Y => &self.y,
            Role::Size => &self.size,
        };
        expression.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// Supplied expressions in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|expression| (role, expression)))
    }
}

/// One output record: a dimension tuple with its measure values, by role.
pub type Point = IndexMap<Role, Literal>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "pointseries")]
pub struct PointSeries {
    pub columns: IndexMap<Role, ColumnInfo>,
    pub rows: Vec<Point>,
}

pub struct PointSeriesTransform<E = Interpreter> {
    evaluator: E,
}

impl Default for PointSeriesTransform<Interpreter> {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSeriesTransform<Interpreter> {
    pub fn new() -> Self {
        Self::with_evaluator(Interpreter::new())
    }
}

impl<E: Evaluator> PointSeriesTransform<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Run the transform. Any classification or evaluation failure aborts the
    /// whole run; the datatable is never modified.
    pub fn apply(
        &self,
        datatable: &Datatable,
        args: &PointSeriesArgs,
    ) -> TransformResult<PointSeries> {
        let scope = Scope::from_datatable(datatable);
        let classified = args
            .iter()
            .map(|(role, expression)| {
                classifier::classify(&self.evaluator, datatable, &scope, role, expression)
            })
            .collect::<TransformResult<Vec<Classified>>>()?;

        let (dimensions, measures): (Vec<&Classified>, Vec<&Classified>) =
            classified.iter().partition(|c| c.is_dimension());

        let groups = grouper::group_rows(&self.evaluator, datatable, &scope, &dimensions)?;
        let measure_values =
            measures::aggregate(&self.evaluator, datatable, &groups, &measures)?;
        let rows = assembler::assemble(&groups, &measure_values);

        let columns = classified.iter().map(|c| (c.role, c.info)).collect();
        debug!(
            "point series with {} dimensions, {} measures and {} points",
            dimensions.len(),
            measures.len(),
            rows.len()
        );
        Ok(PointSeries { columns, rows })
    }
}

/// Transform `datatable` with the built-in [`Interpreter`].
pub fn pointseries(datatable: &Datatable, args: &PointSeriesArgs) -> TransformResult<PointSeries> {
    PointSeriesTransform::new().apply(datatable, args)
}
