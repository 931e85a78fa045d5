// src/error.rs

use std::path::PathBuf;

/// Errors raised while loading captures and preparing them for plotting.
#[derive(Debug, thiserror::Error)]
pub enum JitterError {
    /// The data directory is missing or cannot be listed.
    #[error("Cannot read data directory '{}': {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No .csv files were found in {}", .0.display())]
    NoCaptures(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required capture columns are absent.
    #[error("Missing required headers in '{}': {missing}", .path.display())]
    MissingHeaders { path: PathBuf, missing: String },

    #[error("Invalid time value '{value}' in '{}' at data row {row}", .path.display())]
    InvalidTime {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error(
        "Time goes backwards in '{}' at data row {row}: {previous} -> {current}",
        .path.display()
    )]
    NonMonotonicTime {
        path: PathBuf,
        row: usize,
        previous: f64,
        current: f64,
    },

    /// Two capture files map to the same name and would overwrite each other's output.
    #[error(
        "Captures '{}' and '{}' share the name '{name}'; rename one of them",
        .first.display(),
        .second.display()
    )]
    DuplicateCaptureName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Figures would be neither shown nor saved; pass --save or drop --hide")]
    NothingToDo,
}

// src/error.rs
