use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO Error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Schema Error: required column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error("Data Validation Error: row {row}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Data Validation Error: dataset contains no records")]
    Empty,
}

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Unknown launch site: {0}")]
    UnknownSite(String),

    #[error("Invalid payload range: {low} .. {high}")]
    InvalidRange { low: f64, high: f64 },
}
