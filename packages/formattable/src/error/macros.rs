//! Macros for error creation and handling

/// Create an error from a kind and a variadic argument list.
///
/// Arguments are converted with [`Arg::from`](crate::Arg) and passed to
/// [`FormattableError::from_args`](crate::FormattableError::from_args), so the
/// same rules apply: a trailing error becomes the cause and the template is
/// only formatted when values follow it.
///
/// ```
/// use formattable_error::{err, Arg, ErrorKind};
///
/// let io = Arg::error(std::io::Error::other("timed out"));
/// let e = err!(ErrorKind::Timeout, "gave up after %d tries", 3, io);
/// assert_eq!(e.message(), "gave up after 3 tries");
/// assert!(e.cause().is_some());
/// ```
#[macro_export]
macro_rules! err {
    ($kind:expr $(,)?) => {
        $crate::FormattableError::new($kind)
    };
    ($kind:expr, $($arg:expr),+ $(,)?) => {
        $crate::FormattableError::from_args($kind, [$($crate::Arg::from($arg)),+])
    };
}

/// Return early with an error built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::err!($($arg)*).into())
    };
}

/// Return early with an error built by [`err!`] unless a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
