//! Tabular input: typed columns plus rows carrying a stable row id.

pub mod csv;

use std::{fmt::Display, io::Read};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{data_types::DataType, expressions::Literal, TransformError, TransformResult};

static NULL: Literal = Literal::Null;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Identity assigned to a row by its source. Not necessarily positional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Index(u64),
    Key(String),
}

impl Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowId::Index(v) => v.fmt(f),
            RowId::Key(v) => v.fmt(f),
        }
    }
}

impl From<u64> for RowId {
    fn from(v: u64) -> Self {
        RowId::Index(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Key(v.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "rowId", alias = "_rowId")]
    pub row_id: RowId,
    #[serde(flatten)]
    pub values: IndexMap<String, Literal>,
}

impl Row {
    pub fn new<I, K, V>(row_id: impl Into<RowId>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Literal>,
    {
        Self {
            row_id: row_id.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value stored under `column`; a missing cell reads as null.
    pub fn get(&self, column: &str) -> &Literal {
        self.values.get(column).unwrap_or(&NULL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datatable {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Datatable {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn from_json_str(json: &str) -> TransformResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> TransformResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_type(&self, name: &str) -> TransformResult<DataType> {
        self.column(name)
            .map(|c| c.data_type)
            .ok_or_else(|| TransformError::ColumnNotFound(name.to_string()))
    }
}
