use std::collections::HashMap;

use crate::{
    datatable::{Column, Datatable, Row},
    expressions::Literal,
};

/// Evaluation scope: every catalogue column bound, by name, to its values over
/// a set of rows in row order.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    columns: HashMap<&'a str, Vec<Literal>>,
    row_count: usize,
}

impl<'a> Scope<'a> {
    pub fn new<'r, I>(columns: &'a [Column], rows: I) -> Self
    where
        I: IntoIterator<Item = &'r Row>,
    {
        let rows: Vec<&Row> = rows.into_iter().collect();
        let columns = columns
            .iter()
            .map(|column| {
                let values = rows.iter().map(|row| row.get(&column.name).clone()).collect();
                (column.name.as_str(), values)
            })
            .collect();
        Self {
            columns,
            row_count: rows.len(),
        }
    }

    pub fn from_datatable(datatable: &'a Datatable) -> Self {
        Self::new(&datatable.columns, &datatable.rows)
    }

    pub fn column(&self, name: &str) -> Option<&[Literal]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}
