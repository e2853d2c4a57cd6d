/// Error types for dataset loading and control lookups
use std::path::PathBuf;
use thiserror::Error;

/// Raised while loading the dashboard datasets at startup.
///
/// Any of these is fatal: the dashboard cannot be served without all of
/// its tables.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A configured dataset file does not exist
    #[error("Dataset file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Reading a dataset file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to open or read a workbook
    #[cfg(feature = "xlsx")]
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook has no sheet with this name
    #[error("Worksheet '{sheet}' not found in {}", path.display())]
    MissingSheet { path: PathBuf, sheet: String },

    /// The file extension is not one we know how to read
    #[error("Unsupported dataset format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A table has no header row
    #[error("{table}: no header row")]
    MissingHeader { table: String },

    /// A table has a header but no data rows
    #[error("{table}: no data rows")]
    EmptyTable { table: String },

    /// A required column is absent from the header row
    #[error("{table}: missing expected column '{column}'")]
    MissingColumn { table: String, column: String },

    /// A cell could not be parsed into the expected type
    #[error("{table}: invalid value '{value}' in column '{column}' (row {row})")]
    InvalidValue {
        table: String,
        column: String,
        row: usize,
        value: String,
    },

    /// The price and production time series do not cover the same regions
    #[error("Time series tables disagree on region columns: {0}")]
    RegionMismatch(String),

    /// The dataset configuration file could not be parsed
    #[error("Invalid dataset config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Raised when a control value falls outside the domain the dashboard offers.
///
/// The UI only offers valid options, so this signals a programming or
/// configuration error rather than a user mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown predictor: {0}")]
    UnknownPredictor(String),

    #[error("Unknown axis mode: {0}")]
    UnknownAxisMode(String),

    #[error("State not present in county data: {0}")]
    UnknownState(String),

    #[error("Region not present in time series data: {0}")]
    UnknownRegion(String),
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
