//! Point series transform: groups a typed datatable by dimension expressions
//! and aggregates measure expressions per group, yielding a deduplicated set
//! of points.
//!
//! ```no_run
//! use pointseries::{datatable::Datatable, pointseries, PointSeriesArgs};
//!
//! let datatable = Datatable::from_json_str(r#"{"columns": [], "rows": []}"#)?;
//! let model = pointseries(&datatable, &PointSeriesArgs::new().x("country").y("sum(profit)"))?;
//! # Ok::<(), pointseries::TransformError>(())
//! ```

mod errors;
pub use errors::*;

pub mod aggregators;
pub mod data_types;
pub mod datatable;
pub mod expressions;
pub mod functions;
pub mod interpreter;
pub mod parser;
pub mod scope;

mod pointseries;
pub use pointseries::{
    pointseries, ColumnInfo, ColumnRole, Point, PointSeries, PointSeriesArgs,
    PointSeriesTransform, Role,
};
