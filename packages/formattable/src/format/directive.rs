//! Directive parsing

use super::FormatError;

/// A parsed `%...` directive
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Directive {
    /// Explicit 1-based argument number (`%2$s`)
    pub argnum: Option<usize>,
    /// Pad on the right instead of the left
    pub left_justify: bool,
    /// Always print a sign for numbers
    pub plus: bool,
    /// Padding character
    pub pad: char,
    /// Minimum field width
    pub width: usize,
    /// Digits after the point for floats, max length for strings
    pub precision: Option<usize>,
    /// Conversion specifier
    pub specifier: char,
}

/// Result of parsing at a `%`
#[derive(Debug)]
pub(super) enum Parsed {
    /// `%%`
    Literal { next: usize },
    /// A conversion consuming one value
    Directive { directive: Directive, next: usize },
}

/// Widest field accepted, so padding stays a bounded allocation
pub(super) const MAX_WIDTH: usize = u16::MAX as usize;

const SPECIFIERS: &[char] = &[
    'b', 'c', 'd', 'e', 'E', 'f', 'F', 'g', 'G', 'i', 'o', 's', 'u', 'x', 'X',
];

/// Parse the directive starting at `start`, which must index a `%`.
pub(super) fn parse(chars: &[char], start: usize) -> Result<Parsed, FormatError> {
    let incomplete = FormatError::IncompleteDirective { position: start };
    let mut pos = start + 1;

    match chars.get(pos) {
        None => return Err(incomplete),
        Some('%') => return Ok(Parsed::Literal { next: pos + 1 }),
        Some(_) => {}
    }

    let mut directive = Directive {
        argnum: None,
        left_justify: false,
        plus: false,
        pad: ' ',
        width: 0,
        precision: None,
        specifier: 's',
    };

    // argnum only counts when the digits are followed by '$'
    let (digits, after) = read_number(chars, pos);
    if let (Some(n), Some('$')) = (digits, chars.get(after)) {
        directive.argnum = Some(n);
        pos = after + 1;
    }

    loop {
        match chars.get(pos) {
            Some('-') => directive.left_justify = true,
            Some('+') => directive.plus = true,
            Some(' ') => directive.pad = ' ',
            Some('0') => directive.pad = '0',
            Some('\'') => {
                pos += 1;
                directive.pad = *chars.get(pos).ok_or(incomplete.clone())?;
            }
            Some(_) => break,
            None => return Err(incomplete),
        }
        pos += 1;
    }

    let (width, after) = read_number(chars, pos);
    directive.width = width.unwrap_or(0);
    if directive.width > MAX_WIDTH {
        return Err(FormatError::WidthOutOfRange {
            max: MAX_WIDTH,
            position: start,
        });
    }
    pos = after;

    if chars.get(pos) == Some(&'.') {
        let (precision, after) = read_number(chars, pos + 1);
        directive.precision = Some(precision.unwrap_or(0));
        pos = after;
    }

    let specifier = *chars.get(pos).ok_or(incomplete)?;
    if !SPECIFIERS.contains(&specifier) {
        return Err(FormatError::UnknownSpecifier {
            specifier,
            position: start,
        });
    }
    directive.specifier = specifier;

    Ok(Parsed::Directive {
        directive,
        next: pos + 1,
    })
}

/// Read a run of ASCII digits, returning the value and the index after it.
fn read_number(chars: &[char], start: usize) -> (Option<usize>, usize) {
    let mut pos = start;
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.get(pos).and_then(|c| c.to_digit(10)) {
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
        pos += 1;
    }
    (value, pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(s: &str) -> Directive {
        let chars: Vec<char> = s.chars().collect();
        match parse(&chars, 0) {
            Ok(Parsed::Directive { directive, .. }) => directive,
            other => panic!("expected a directive, got {other:?}"),
        }
    }

    #[test]
    fn test_full_directive() {
        let d = parse_str("%2$-'#10.4f");
        assert_eq!(d.argnum, Some(2));
        assert!(d.left_justify);
        assert_eq!(d.pad, '#');
        assert_eq!(d.width, 10);
        assert_eq!(d.precision, Some(4));
        assert_eq!(d.specifier, 'f');
    }

    #[test]
    fn test_width_is_not_argnum() {
        let d = parse_str("%12s");
        assert_eq!(d.argnum, None);
        assert_eq!(d.width, 12);
    }

    #[test]
    fn test_zero_flag_then_width() {
        let d = parse_str("%08.2f");
        assert_eq!(d.pad, '0');
        assert_eq!(d.width, 8);
        assert_eq!(d.precision, Some(2));
    }

    #[test]
    fn test_bare_dot_precision() {
        let d = parse_str("%.s");
        assert_eq!(d.precision, Some(0));
    }

    #[test]
    fn test_literal() {
        let chars: Vec<char> = "%%".chars().collect();
        assert!(matches!(parse(&chars, 0), Ok(Parsed::Literal { next: 2 })));
    }

    #[test]
    fn test_width_out_of_range() {
        let chars: Vec<char> = "%99999999999999999999s".chars().collect();
        assert_eq!(
            parse(&chars, 0).err(),
            Some(FormatError::WidthOutOfRange {
                max: MAX_WIDTH,
                position: 0
            })
        );
    }

    #[test]
    fn test_incomplete() {
        for s in ["%", "%-", "%'", "%5", "%.3"] {
            let chars: Vec<char> = s.chars().collect();
            assert_eq!(
                parse(&chars, 0).err(),
                Some(FormatError::IncompleteDirective { position: 0 }),
                "{s}"
            );
        }
    }
}
