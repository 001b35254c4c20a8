//! Error types for scrollchrome_ui

use thiserror::Error;

/// Errors from parsing theme related identifiers.
///
/// Geometry, hit testing and painting never fail; only text input can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown visual state: {0}")]
    UnknownVisualState(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
