use crate::plots::PlotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Cannot open dataset {path}: {source}")]
    DatasetOpen {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Column '{column}' not found in dataset")]
    MissingColumn { column: String },

    #[error("Column '{column}' row {row}: '{value}' is not a number")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Config error in {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("Chart error: {0}")]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
