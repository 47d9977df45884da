//! Error construction with formatted messages and chained causes
//!
//! Provides a single error type with:
//! - printf-style message templates
//! - an optional cause, picked from the tail of the argument list
//! - a kind tag naming the error family
//! - construction site and backtrace capture

pub mod builder;
pub mod chain;
pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
pub mod macros;
pub mod report;
pub mod types;

// Re-export all public types and traits
pub use builder::ErrorBuilder;
pub use chain::Chain;
pub use extensions::{OptionExt, ResultExt};
pub use report::ErrorReport;
pub use types::{ErrorKind, FormattableError, Location, Result};
