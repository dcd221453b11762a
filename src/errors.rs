//! Unified application error type.
//! Date resolution failures live in `RangeError`; every other module
//! (db, core, cli, utils) returns AppError, which wraps RangeError.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Failures produced while turning user input into a `DateRange`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Please enter a date range")]
    EmptyInput,

    #[error("{reason}: \"{input}\"")]
    InvalidDate { input: String, reason: String },

    #[error("Invalid date format in {side} date: {source}")]
    InvalidRange {
        side: &'static str,
        #[source]
        source: Box<RangeError>,
    },

    #[error("Start date must be before end date ({start} is after {end})")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    #[error(
        "Unrecognized date range \"{0}\": use a format like 'YYYY-MM-DD to YYYY-MM-DD' or 'last 30 days'"
    )]
    UnrecognizedFormat(String),

    #[error("Unknown period: {0}")]
    UnknownPreset(String),

    #[error("Internal error while computing date window: {0}")]
    InternalInvariant(String),
}

impl RangeError {
    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        RangeError::InvalidDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Date resolution
    // ---------------------------
    #[error(transparent)]
    Range(#[from] RangeError),

    // ---------------------------
    // Dashboard URL
    // ---------------------------
    #[error("Invalid URL \"{0}\"")]
    InvalidUrl(String),

    #[error("Not a dashboard page: {0} (expected host {1})")]
    NotDashboardUrl(String, String),

    #[error("Invalid {0}: {1}")]
    InvalidParam(&'static str, String),

    // ---------------------------
    // Saved filters & settings
    // ---------------------------
    #[error("A filter named \"{0}\" already exists. Please choose a different name.")]
    DuplicateFilter(String),

    #[error("No saved filter matches \"{0}\"")]
    FilterNotFound(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
