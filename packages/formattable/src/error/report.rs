//! Serializable snapshot of an error and its causes

use super::types::{ErrorKind, FormattableError};
use serde::{Deserialize, Serialize};

/// Plain-data view of a [`FormattableError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error family
    pub kind: ErrorKind,
    /// Formatted message
    pub message: String,
    /// Numeric code
    pub code: i32,
    /// `file:line:column` of the construction site
    pub location: String,
    /// Display text of every cause, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl FormattableError {
    /// Snapshot this error and its cause chain
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind().clone(),
            message: self.message().to_string(),
            code: self.code(),
            location: self.location().to_string(),
            causes: self.chain().skip(1).map(ToString::to_string).collect(),
        }
    }
}

impl From<&FormattableError> for ErrorReport {
    fn from(error: &FormattableError) -> Self {
        error.report()
    }
}
