//! Ошибки пайплайна предобработки

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrepError>;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Required column not found: {0}")]
    MissingColumn(String),

    #[error("Test fraction must be in [0, 1), got {0}")]
    InvalidFraction(f64),

    #[error("No feature columns left after exclusions")]
    EmptyFeatureSet,

    #[error("Feature blocks disagree on schema: expected {expected:?}, found {found:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Data error: {0}")]
    Data(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
