//! Core error types for pausa-core.
//!
//! Per-area error enums under a single [`CoreError`] umbrella. Nothing in
//! this crate is fatal to the host: timer and input errors are recovered at
//! the triggering user action and translated into a one-line notification.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pausa-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer-related errors
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// User input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Timer-specific errors.
#[derive(Error, Debug)]
pub enum TimerError {
    /// A session is already active; starts are rejected, never queued.
    #[error("a session is already running")]
    AlreadyRunning,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// User input errors.
#[derive(Error, Debug)]
pub enum InputError {
    /// Free-form duration entry that does not parse as a positive number of
    /// minutes. Callers recover by substituting the documented default.
    #[error("'{input}' is not a valid number of minutes")]
    InvalidDuration { input: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
