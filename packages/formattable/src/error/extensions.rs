//! Extension traits for wrapping foreign errors and missing values

use super::types::{ErrorKind, FormattableError, Result};
use crate::arg::Arg;
use std::error::Error as StdError;
use std::iter;

/// Wrap the error of a `Result` as the cause of a new formatted error
pub trait ResultExt<T> {
    /// Replace the error with a new one built from `args`, chaining the
    /// original error as its cause
    ///
    /// ```
    /// use formattable_error::{Arg, ErrorKind, ResultExt};
    ///
    /// let parsed = "x1".parse::<u32>().or_raise(
    ///     ErrorKind::Validation,
    ///     [Arg::from("bad port %s"), Arg::from("x1")],
    /// );
    /// let err = parsed.unwrap_err();
    /// assert_eq!(err.message(), "bad port x1");
    /// assert!(err.cause().is_some());
    /// ```
    fn or_raise<I>(self, kind: ErrorKind, args: I) -> Result<T>
    where
        I: IntoIterator<Item = Arg>;

    /// Like [`ResultExt::or_raise`], building the arguments only on error
    fn or_raise_with<F, I>(self, kind: ErrorKind, args: F) -> Result<T>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Arg>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[track_caller]
    fn or_raise<I>(self, kind: ErrorKind, args: I) -> Result<T>
    where
        I: IntoIterator<Item = Arg>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(FormattableError::from_args(
                kind,
                args.into_iter().chain(iter::once(Arg::error(cause))),
            )),
        }
    }

    #[track_caller]
    fn or_raise_with<F, I>(self, kind: ErrorKind, args: F) -> Result<T>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Arg>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(FormattableError::from_args(
                kind,
                args().into_iter().chain(iter::once(Arg::error(cause))),
            )),
        }
    }
}

/// Turn a missing value into a formatted error
pub trait OptionExt<T> {
    /// Return the value, or an error built from `args` when it is `None`
    fn or_raise<I>(self, kind: ErrorKind, args: I) -> Result<T>
    where
        I: IntoIterator<Item = Arg>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn or_raise<I>(self, kind: ErrorKind, args: I) -> Result<T>
    where
        I: IntoIterator<Item = Arg>,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(FormattableError::from_args(kind, args)),
        }
    }
}
