//! Typed builder for errors
//!
//! The builder names each part explicitly, so a cause is never guessed from
//! the position of an argument. Format values that happen to be errors are
//! formatted, not chained.

use super::constructors::{render_lenient, render_message};
use super::types::{ErrorKind, FormattableError, Location};
use crate::arg::{Arg, SharedError};
use crate::format::FormatError;
use std::error::Error as StdError;
use std::sync::Arc;

/// Builder for [`FormattableError`]
///
/// ```
/// use formattable_error::{ErrorKind, FormattableError};
///
/// let err = FormattableError::builder(ErrorKind::NotFound)
///     .message("no user with id %d")
///     .arg(42)
///     .cause(std::io::Error::other("row missing"))
///     .build();
///
/// assert_eq!(err.message(), "no user with id 42");
/// assert!(err.cause().is_some());
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct ErrorBuilder {
    kind: ErrorKind,
    template: Option<String>,
    values: Vec<Arg>,
    cause: Option<SharedError>,
    location: Location,
}

impl ErrorBuilder {
    pub(super) fn new(kind: ErrorKind, location: Location) -> Self {
        Self {
            kind,
            template: None,
            values: Vec::new(),
            cause: None,
            location,
        }
    }

    /// Set the message template
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Append one format value
    pub fn arg(mut self, value: impl Into<Arg>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append several format values
    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Set the cause
    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Set the cause from an already shared error, keeping the same reference
    pub fn cause_arc(mut self, cause: SharedError) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Build the error; a template that does not match its values is kept verbatim
    #[must_use]
    pub fn build(self) -> FormattableError {
        let message = render_lenient(self.template, &self.values);
        FormattableError::assemble(self.kind, message, self.cause, self.location)
    }

    /// Build the error, reporting a template that does not match its values
    pub fn try_build(self) -> Result<FormattableError, FormatError> {
        let message = render_message(self.template, &self.values)?;
        Ok(FormattableError::assemble(
            self.kind,
            message,
            self.cause,
            self.location,
        ))
    }
}
