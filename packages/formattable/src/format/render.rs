//! Value conversion and padding for a single directive

use super::directive::Directive;
use crate::arg::Arg;

const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Float precision is clamped to this many digits
const MAX_FLOAT_PRECISION: usize = 53;

pub(super) fn render(directive: &Directive, arg: &Arg) -> String {
    match directive.specifier {
        's' => {
            let mut text = arg.to_display_string();
            if let Some(max) = directive.precision {
                text = text.chars().take(max).collect();
            }
            pad(directive, "", &text)
        }
        'd' | 'i' => signed(directive, arg.to_i64()),
        'u' => pad(directive, "", &(arg.to_i64() as u64).to_string()),
        'b' => pad(directive, "", &format!("{:b}", arg.to_i64() as u64)),
        'o' => pad(directive, "", &format!("{:o}", arg.to_i64() as u64)),
        'x' => pad(directive, "", &format!("{:x}", arg.to_i64() as u64)),
        'X' => pad(directive, "", &format!("{:X}", arg.to_i64() as u64)),
        'c' => u32::try_from(arg.to_i64())
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
        'e' | 'E' | 'f' | 'F' | 'g' | 'G' => float(directive, arg.to_f64()),
        _ => String::new(),
    }
}

fn signed(directive: &Directive, value: i64) -> String {
    let sign = if value < 0 {
        "-"
    } else if directive.plus {
        "+"
    } else {
        ""
    };
    pad(directive, sign, &value.unsigned_abs().to_string())
}

fn float(directive: &Directive, value: f64) -> String {
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else if directive.plus {
        "+"
    } else {
        ""
    };
    let magnitude = value.abs();

    if magnitude.is_nan() {
        return pad(directive, "", "NAN");
    }
    if magnitude.is_infinite() {
        return pad(directive, sign, "INF");
    }

    let precision = directive
        .precision
        .unwrap_or(DEFAULT_FLOAT_PRECISION)
        .min(MAX_FLOAT_PRECISION);
    let body = match directive.specifier {
        'e' => scientific(magnitude, precision, 'e'),
        'E' => scientific(magnitude, precision, 'E'),
        'g' => general(magnitude, precision, 'e'),
        'G' => general(magnitude, precision, 'E'),
        _ => format!("{magnitude:.precision$}"),
    };
    pad(directive, sign, &body)
}

/// `1.234500e+3` style: explicit exponent sign, no exponent zero padding
fn scientific(magnitude: f64, precision: usize, marker: char) -> String {
    let raw = format!("{magnitude:.precision$e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent = if exponent.starts_with('-') {
        exponent.to_string()
    } else {
        format!("+{exponent}")
    };
    format!("{mantissa}{marker}{exponent}")
}

/// Shorter of fixed and scientific, trailing zeros removed
fn general(magnitude: f64, precision: usize, marker: char) -> String {
    let significant = precision.max(1);
    if magnitude == 0.0 {
        return "0".to_string();
    }

    // exponent after rounding to the requested significant digits
    let probe = format!("{:.*e}", significant - 1, magnitude);
    let exponent: i32 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exponent < -4 || exponent >= significant as i32 {
        let text = scientific(magnitude, significant - 1, marker);
        match text.split_once(marker) {
            Some((mantissa, exp)) => format!("{}{marker}{exp}", trim_fraction(mantissa)),
            None => text,
        }
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{magnitude:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Apply width and justification.
///
/// Zero padding of a right-justified value goes between the sign and the
/// digits; any other padding goes outside the sign.
fn pad(directive: &Directive, sign: &str, body: &str) -> String {
    let len = sign.chars().count() + body.chars().count();
    let fill: String = std::iter::repeat(directive.pad)
        .take(directive.width.saturating_sub(len))
        .collect();

    if directive.left_justify {
        format!("{sign}{body}{fill}")
    } else if directive.pad == '0' {
        format!("{sign}{fill}{body}")
    } else {
        format!("{fill}{sign}{body}")
    }
}
