//! Number parsing, rounding and display formatting
//!
//! Operand text is parsed leniently (longest numeric prefix wins), results
//! are rounded to [`DECIMAL_PLACES`] and printed the way a browser prints
//! numbers, so the terminal and web front ends show identical text.

use crate::core::CalcResult;

/// Number of decimal places kept by [`round_result`]
pub const DECIMAL_PLACES: i32 = 10;

const SCALE: f64 = 1e10;

/// Rounds a finite, non-integer value to [`DECIMAL_PLACES`].
///
/// Ties round toward positive infinity. Integers, infinities and NaN are
/// returned unchanged.
#[must_use]
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() || value.fract() == 0.0 {
        return value;
    }

    let scaled = value * SCALE;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / SCALE
}

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with at
/// most one decimal point, an optional exponent, or `Infinity`. Anything
/// after the prefix is ignored; no prefix at all yields NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(bytes, exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Formats a number as canonical decimal text.
///
/// Plain notation inside `[1e-6, 1e21)`, exponent notation (`1e+21`,
/// `1e-7`) outside it. Negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponential,
    }
}

/// Formats a calculation result for the display.
///
/// Errors render as their message, numbers through [`format_number`].
#[must_use]
pub fn format_result(result: &CalcResult<f64>) -> String {
    match result {
        Ok(value) => format_number(*value),
        Err(err) => err.to_string(),
    }
}
