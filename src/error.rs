use std::path::PathBuf;
use thiserror::Error;

/// The main error type for photoinfo operations.
#[derive(Debug, Error)]
pub enum PhotoInfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a JPEG or no EXIF data in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: exif::Error,
    },

    #[error("Cannot convert '{value}' to a fraction")]
    InvalidFractionInput { value: String },

    #[error("Maximum denominator must be at least 1, got {0}")]
    InvalidMaxDenominator(u64),

    #[error("Failed to write report CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse report CSV from {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid report CSV in {path}: {message}")]
    CsvInvalid { path: PathBuf, message: String },

    #[error("Report for {path} contains characters not representable in {encoding}")]
    Unencodable {
        encoding: &'static str,
        path: PathBuf,
    },

    #[error("Failed to serialize run summary: {0}")]
    Json(#[from] serde_json::Error),
}
