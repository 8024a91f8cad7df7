//! Unified application error type.
//! Ingestion, aggregation, image lookup and the CLI all return AppError so
//! that every failure reaches the user through the same path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Upload errors
    // ---------------------------
    #[error("File could not be read as {0}")]
    Format(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Unsupported file type: {0} (expected .csv, .xlsx or .xlsm)")]
    UnsupportedFile(String),

    #[error("Image archive error: {0}")]
    Archive(String),

    // ---------------------------
    // Selection errors
    // ---------------------------
    #[error("The uploaded data contains no vendor values")]
    EmptyDataset,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
