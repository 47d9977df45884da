//! printf-style message formatting
//!
//! Templates use the classic `%[argnum$][flags][width][.precision]specifier`
//! directive syntax. Values are consumed left to right unless a directive
//! names its argument explicitly with `argnum$`.

mod directive;
mod render;

use crate::arg::Arg;
use directive::{Directive, Parsed};
use thiserror::Error;

/// Errors raised while substituting values into a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A directive refers to a value that was not supplied
    #[error("too few arguments: value {needed} requested, {given} supplied")]
    MissingArgument {
        /// Number of values the template needs at this point
        needed: usize,
        /// Number of values supplied
        given: usize,
    },

    /// An explicit argument number of zero
    #[error("argument number must be greater than zero (at offset {position})")]
    ZeroArgumentNumber {
        /// Character offset of the directive
        position: usize,
    },

    /// A directive ends with a character that is not a conversion specifier
    #[error("unknown format specifier \"{specifier}\" (at offset {position})")]
    UnknownSpecifier {
        /// The offending character
        specifier: char,
        /// Character offset of the directive
        position: usize,
    },

    /// A field width larger than the formatter accepts
    #[error("width must be at most {max} (at offset {position})")]
    WidthOutOfRange {
        /// Largest accepted width
        max: usize,
        /// Character offset of the directive
        position: usize,
    },

    /// The template ends in the middle of a directive
    #[error("missing format specifier at end of string (at offset {position})")]
    IncompleteDirective {
        /// Character offset of the directive
        position: usize,
    },
}

/// Substitute `args` into `template`.
///
/// Surplus values are ignored. A directive that needs more values than were
/// supplied fails with [`FormatError::MissingArgument`]. Float precision is
/// capped at 53 digits; widths above 65535 fail with
/// [`FormatError::WidthOutOfRange`].
pub fn sprintf(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0usize;
    let mut pos = 0usize;

    while pos < chars.len() {
        let c = chars[pos];
        if c != '%' {
            out.push(c);
            pos += 1;
            continue;
        }

        match directive::parse(&chars, pos)? {
            Parsed::Literal { next } => {
                out.push('%');
                pos = next;
            }
            Parsed::Directive { directive, next } => {
                let arg = select(&directive, args, &mut cursor, pos)?;
                out.push_str(&render::render(&directive, arg));
                pos = next;
            }
        }
    }

    Ok(out)
}

fn select<'a>(
    directive: &Directive,
    args: &'a [Arg],
    cursor: &mut usize,
    position: usize,
) -> Result<&'a Arg, FormatError> {
    let index = match directive.argnum {
        Some(0) => return Err(FormatError::ZeroArgumentNumber { position }),
        Some(n) => n - 1,
        None => {
            let index = *cursor;
            *cursor += 1;
            index
        }
    };

    args.get(index).ok_or(FormatError::MissingArgument {
        needed: index + 1,
        given: args.len(),
    })
}
