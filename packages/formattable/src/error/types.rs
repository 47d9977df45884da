//! Core error types and definitions

use crate::arg::SharedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error with a formatted message and an optional chained cause
#[derive(Debug, Clone)]
pub struct FormattableError {
    /// Shared so clones keep the same cause reference
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// Which family of error this is
    pub kind: ErrorKind,
    /// Fully formatted message
    pub message: String,
    /// Error this one wraps
    pub cause: Option<SharedError>,
    /// Where the error was constructed
    pub location: Location,
    /// Backtrace captured at error creation
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Named error families sharing the same construction logic
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No particular family
    #[default]
    #[error("Error")]
    Generic,

    /// I/O related errors
    #[error("I/O error")]
    Io,

    /// Configuration errors
    #[error("Configuration error")]
    Configuration,

    /// Validation errors
    #[error("Validation error")]
    Validation,

    /// Not found
    #[error("Not found")]
    NotFound,

    /// Already exists
    #[error("Already exists")]
    AlreadyExists,

    /// Permission denied
    #[error("Permission denied")]
    PermissionDenied,

    /// Operation timeout
    #[error("Operation timed out")]
    Timeout,

    /// Internal error
    #[error("Internal error")]
    Internal,

    /// Caller-defined family
    #[error("{0}")]
    Other(String),
}

/// Source position where an error was constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Location {
    /// Location of the caller of the enclosing `#[track_caller]` function
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Source file path
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number
    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Result type alias using our error
pub type Result<T> = std::result::Result<T, FormattableError>;
