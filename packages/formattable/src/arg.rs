//! Heterogeneous construction arguments
//!
//! An error is raised from an ordered list of [`Arg`]s: a template, the values
//! substituted into it, and optionally a trailing cause. Each argument keeps
//! its own type so the printf engine can convert it the way the directive asks.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a cause error.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// One element of an error construction argument list
#[derive(Clone)]
pub enum Arg {
    /// Text value
    Str(String),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Single character value
    Char(char),
    /// Absent value
    Null,
    /// Error value; chained as the cause when it is the last argument
    Error(SharedError),
}

impl Arg {
    /// Wrap any error value so it can be passed as an argument
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Arc::new(error))
    }

    /// Whether this argument is an error value
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Text used when the argument is rendered with `%s`
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Float(n) => float_to_string(*n),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) | Self::Null => String::new(),
            Self::Char(c) => c.to_string(),
            Self::Error(e) => e.to_string(),
        }
    }

    /// Integer value used by the integer directives
    ///
    /// Unsigned values above `i64::MAX` wrap, so `%d` of `u64::MAX` is `-1`;
    /// `%u` shows the original value.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        match self {
            Self::Str(s) => leading_number(s) as i64,
            Self::Int(n) => *n,
            Self::UInt(n) => *n as i64,
            Self::Float(n) => *n as i64,
            Self::Bool(b) => i64::from(*b),
            Self::Char(c) => leading_number(&c.to_string()) as i64,
            Self::Null | Self::Error(_) => 0,
        }
    }

    /// Floating point value used by the float directives
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Str(s) => leading_number(s),
            Self::Int(n) => *n as f64,
            Self::UInt(n) => *n as f64,
            Self::Float(n) => *n,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Char(c) => leading_number(&c.to_string()),
            Self::Null | Self::Error(_) => 0.0,
        }
    }
}

/// Shortest decimal rendering: integral floats drop the fraction
fn float_to_string(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else if n.is_nan() {
        "NAN".to_string()
    } else if n == f64::INFINITY {
        "INF".to_string()
    } else if n == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        n.to_string()
    }
}

/// Parse the numeric prefix of `s`, ignoring leading whitespace.
///
/// Text without a numeric prefix is zero.
fn leading_number(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end == digits_start || (end == digits_start + 1 && bytes[digits_start] == b'.') {
        return 0.0;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    trimmed[..end].parse().unwrap_or(0.0)
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Self::Null => f.write_str("Null"),
            Self::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<std::borrow::Cow<'_, str>> for Arg {
    fn from(value: std::borrow::Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Self::UInt(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<SharedError> for Arg {
    fn from(value: SharedError) -> Self {
        Self::Error(value)
    }
}

impl From<&SharedError> for Arg {
    fn from(value: &SharedError) -> Self {
        Self::Error(Arc::clone(value))
    }
}

impl From<std::io::Error> for Arg {
    fn from(value: std::io::Error) -> Self {
        Self::error(value)
    }
}

impl From<std::fmt::Error> for Arg {
    fn from(value: std::fmt::Error) -> Self {
        Self::error(value)
    }
}

impl From<anyhow::Error> for Arg {
    fn from(value: anyhow::Error) -> Self {
        let boxed: Box<dyn StdError + Send + Sync + 'static> = value.into();
        Self::Error(Arc::from(boxed))
    }
}

impl From<crate::error::FormattableError> for Arg {
    fn from(value: crate::error::FormattableError) -> Self {
        Self::error(value)
    }
}

impl From<&crate::error::FormattableError> for Arg {
    fn from(value: &crate::error::FormattableError) -> Self {
        Self::error(value.clone())
    }
}
