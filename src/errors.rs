//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! The time-ledger calculator itself never fails: it clamps instead.

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
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Session state errors
    // ---------------------------
    #[error("No active session for owner '{0}'")]
    NoActiveSession(String),

    #[error("Owner '{0}' is already clocked in (session {1})")]
    AlreadyClockedIn(String, i64),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Session not found: {0}")]
    SessionNotFound(i64),

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
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
