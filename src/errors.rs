//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::rejection::Rejection;
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

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Invalid work mode: {0}")]
    InvalidWorkMode(String),

    #[error("Invalid punch type: {0}")]
    InvalidPunchType(String),

    // ---------------------------
    // Attendance rules
    // ---------------------------
    #[error("{0}")]
    Rejected(#[from] Rejection),

    #[error("Please select a project before punching in")]
    MissingProject,

    #[error("Unknown geofence: {0}")]
    UnknownGeofence(String),

    #[error("Geofence already exists: {0}")]
    DuplicateGeofence(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
