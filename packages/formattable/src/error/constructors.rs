//! Error constructors and methods

use super::builder::ErrorBuilder;
use super::chain::Chain;
use super::types::{ErrorInner, ErrorKind, FormattableError, Location};
use crate::arg::{Arg, SharedError};
use crate::format::{sprintf, FormatError};
use std::error::Error as StdError;
use std::sync::Arc;

impl FormattableError {
    /// Numeric code carried by every error
    pub const CODE: i32 = 0;

    /// Build an error from an ordered argument list.
    ///
    /// The list is read as `[template, values..., cause]`, every part optional:
    ///
    /// - a trailing [`Arg::Error`] becomes the cause; only the last argument is
    ///   inspected, an error anywhere else is formatted like any other value
    /// - the first remaining argument is the message template
    /// - the template goes through [`sprintf`] only when values follow it, so a
    ///   lone template keeps any `%` characters as written
    ///
    /// If the template does not match the values, the template is kept
    /// verbatim and a warning is logged. Use [`Self::try_from_args`] to get the
    /// [`FormatError`] instead.
    ///
    /// ```
    /// use formattable_error::{Arg, ErrorKind, FormattableError};
    ///
    /// let cause = Arg::error(std::io::Error::other("disk full"));
    /// let err = FormattableError::from_args(
    ///     ErrorKind::Io,
    ///     ["cannot write %s".into(), "cache.db".into(), cause],
    /// );
    /// assert_eq!(err.message(), "cannot write cache.db");
    /// assert!(err.cause().is_some());
    /// ```
    #[track_caller]
    pub fn from_args<I>(kind: ErrorKind, args: I) -> Self
    where
        I: IntoIterator<Item = Arg>,
    {
        let location = Location::caller();
        let parts = split_args(args.into_iter().collect());
        let message = render_lenient(parts.template, &parts.values);
        Self::assemble(kind, message, parts.cause, location)
    }

    /// Like [`Self::from_args`] but reports template errors
    #[track_caller]
    pub fn try_from_args<I>(kind: ErrorKind, args: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = Arg>,
    {
        let location = Location::caller();
        let parts = split_args(args.into_iter().collect());
        let message = render_message(parts.template, &parts.values)?;
        Ok(Self::assemble(kind, message, parts.cause, location))
    }

    /// Create an error with an empty message and no cause
    #[track_caller]
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self::assemble(kind, String::new(), None, Location::caller())
    }

    /// Create an error with a literal message; no `%` processing is done
    #[track_caller]
    pub fn msg(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::assemble(kind, message.into(), None, Location::caller())
    }

    /// Create an error with an empty message wrapping `cause`
    #[track_caller]
    pub fn with_cause<E>(kind: ErrorKind, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::assemble(kind, String::new(), Some(Arc::new(cause)), Location::caller())
    }

    /// Start a builder for an error of `kind`
    #[track_caller]
    pub fn builder(kind: ErrorKind) -> ErrorBuilder {
        ErrorBuilder::new(kind, Location::caller())
    }

    pub(super) fn assemble(
        kind: ErrorKind,
        message: String,
        cause: Option<SharedError>,
        location: Location,
    ) -> Self {
        log::trace!(
            "Constructed {kind} at {location} (message_len: {}, has_cause: {})",
            message.len(),
            cause.is_some()
        );

        Self {
            inner: Arc::new(ErrorInner {
                kind,
                message,
                cause,
                location,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the formatted message, empty if none was given
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Get the wrapped cause, if any
    #[must_use]
    pub fn cause(&self) -> Option<&SharedError> {
        self.inner.cause.as_ref()
    }

    /// Numeric error code, always [`Self::CODE`]
    #[must_use]
    pub fn code(&self) -> i32 {
        Self::CODE
    }

    /// Where the error was constructed
    #[must_use]
    pub fn location(&self) -> Location {
        self.inner.location
    }

    /// Get the backtrace
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// Iterate over this error and every cause below it
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The innermost error in the cause chain (`self` when there is no cause)
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.chain().last().unwrap_or(self)
    }
}

/// Argument list split into its three roles
struct Parts {
    template: Option<String>,
    values: Vec<Arg>,
    cause: Option<SharedError>,
}

fn split_args(mut args: Vec<Arg>) -> Parts {
    // only the tail is inspected
    let cause = if args.last().is_some_and(Arg::is_error) {
        match args.pop() {
            Some(Arg::Error(cause)) => Some(cause),
            _ => None,
        }
    } else {
        None
    };

    if args.is_empty() {
        return Parts {
            template: None,
            values: args,
            cause,
        };
    }

    let template = match args.remove(0) {
        Arg::Str(template) => template,
        other => other.to_display_string(),
    };

    Parts {
        template: Some(template),
        values: args,
        cause,
    }
}

/// Produce the message for `template` and `values`.
///
/// No template means an empty message; a template without values is used
/// verbatim.
pub(super) fn render_message(
    template: Option<String>,
    values: &[Arg],
) -> Result<String, FormatError> {
    match template {
        None => Ok(String::new()),
        Some(template) if values.is_empty() => Ok(template),
        Some(template) => sprintf(&template, values),
    }
}

pub(super) fn render_lenient(template: Option<String>, values: &[Arg]) -> String {
    match template {
        None => String::new(),
        Some(template) if values.is_empty() => template,
        Some(template) => sprintf(&template, values).unwrap_or_else(|err| {
            log::warn!("Keeping unformatted message template {template:?}: {err}");
            template
        }),
    }
}
