/*!
 * Error types for the lingo-voice application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors produced by a translation backend or its loader
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error when making a request to the backend fails
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a backend response fails
    #[error("Failed to parse backend response: {0}")]
    ParseError(String),

    /// Error returned by the backend itself
    #[error("Backend responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the backend
        message: String,
    },

    /// The requested model is not available on the backend
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
}

/// Errors that can occur during a translation session
///
/// All variants are non-fatal: the session stays in a well-defined state
/// (loaded or unloaded, history unchanged) after any of them.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backend could not be acquired; the session stays unloaded
    /// (or keeps its previous handle on a reload attempt)
    #[error("Failed to load translation backend: {0}")]
    LoadFailed(#[source] BackendError),

    /// A translation was requested before any successful load
    #[error("Backend not loaded")]
    NotReady,

    /// The input text was empty or whitespace-only
    #[error("Input text is empty")]
    EmptyInput,

    /// The generation call failed; the transcript is untouched
    #[error("Translation failed: {0}")]
    Translation(#[source] BackendError),

    /// A display name was not found in the language catalog
    ///
    /// Only produced by the strict catalog lookup; the session itself
    /// substitutes defaults for unknown names.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a backend
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Error from a translation session
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
