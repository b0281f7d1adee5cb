//! Unified application error type.
//! All modules (db, core, cli, mirror, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // CSV
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No event found for {0}")]
    NoSuchEvent(String),

    #[error("Patient id must not be empty")]
    EmptyPatient,

    // ---------------------------
    // Mirror errors
    // ---------------------------
    #[error("Failed to fetch mirror snapshot: {0}")]
    MirrorFetch(String),

    #[error("Failed to delete mirror row {row}: {reason}")]
    MirrorDelete { row: usize, reason: String },

    #[error("Mirror is not configured (set mirror_url in the config file)")]
    MirrorUnconfigured,

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

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
