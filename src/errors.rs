// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the scanner application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Scan/decode errors
    Scan(ScanError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Scan/decode errors
#[derive(Debug, Clone)]
pub enum ScanError {
    /// Image file could not be read or decoded
    ImageLoad(String),
    /// Barcode decoding failed
    DecodeFailed(String),
}

/// Failure reported while invoking a launch request
///
/// Not part of [`AppError`]: launch failures never escape the dispatcher,
/// which resolves them into a `DispatchOutcome` instead.
#[derive(Debug)]
pub struct LaunchError {
    pub kind: LaunchErrorKind,
}

/// Kind of launch failure
#[derive(Debug)]
pub enum LaunchErrorKind {
    /// The platform reported that nothing can open the URI
    NoHandler,
    /// Any other invocation failure (malformed URI, denied, spawn error)
    Other(String),
}

impl LaunchError {
    /// True when the failure was "no application can open this"
    pub fn is_no_handler(&self) -> bool {
        matches!(self.kind, LaunchErrorKind::NoHandler)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Scan(e) => write!(f, "Scan error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::ImageLoad(msg) => write!(f, "Failed to load image: {}", msg),
            ScanError::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
        }
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LaunchErrorKind::NoHandler => write!(f, "No application can open this link"),
            LaunchErrorKind::Other(msg) => write!(f, "Launch failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ScanError {}
impl std::error::Error for LaunchError {}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        AppError::Scan(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
