use sqlparser::parser::ParserError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("failed to parse expression: {0}")]
    ParserError(String),
    #[error("expression must be wrapped in an aggregating function such as sum(): `{0}`")]
    UnwrappedExpression(String),
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("function not found: {0}")]
    FunctionNotFound(String),
    #[error("{0}")]
    InterpretingError(String),
    #[error("failed to load datatable: {0}")]
    LoadError(String),
}

pub type TransformResult<T> = Result<T, TransformError>;

impl From<ParserError> for TransformError {
    fn from(e: ParserError) -> Self {
        TransformError::ParserError(e.to_string())
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(e: serde_json::Error) -> Self {
        TransformError::LoadError(e.to_string())
    }
}

impl From<std::io::Error> for TransformError {
    fn from(e: std::io::Error) -> Self {
        TransformError::LoadError(e.to_string())
    }
}
