//! Errors with printf-style messages and chained causes
//!
//! Every error is built from an ordered argument list: an optional message
//! template, the values substituted into it, and an optional trailing cause.
//!
//! ```
//! use formattable_error::{err, Arg, ErrorKind};
//!
//! let e = err!(ErrorKind::Generic);
//! assert_eq!(e.message(), "");
//!
//! let e = err!(ErrorKind::Validation, "Test %s.", "message");
//! assert_eq!(e.message(), "Test message.");
//!
//! let previous = Arg::error(std::io::Error::other("boom"));
//! let e = err!(ErrorKind::Io, "Test message.", previous);
//! assert_eq!(e.message(), "Test message.");
//! assert_eq!(e.code(), 0);
//! assert!(e.cause().is_some());
//! ```

pub mod arg;
pub mod error;
pub mod format;

pub use arg::{Arg, SharedError};
pub use error::*;
pub use format::{sprintf, FormatError};
