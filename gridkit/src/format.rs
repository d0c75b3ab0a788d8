//! Display formatting for text cells.
//!
//! Supports the standard numeric specifiers `D`, `E`, `F`, `G`, `N`, `P` and
//! `X` (with an optional precision, e.g. `N2`), plus simple custom patterns
//! built from `0`, `#`, `,`, `.` and `%` such as `#,##0.00`. Formats are
//! ignored for non-numeric values.

use crate::error::GridError;
use crate::grid::TextValue;

/// Render `value` for display, applying `format` when one is given.
pub fn format_value(value: &TextValue, format: Option<&str>) -> Result<String, GridError> {
    let format = match format {
        Some(f) if !f.is_empty() => f,
        _ => return Ok(value.to_string()),
    };

    let number = match value {
        TextValue::Int(n) => Number::Int(*n),
        TextValue::Float(x) => Number::Float(*x),
        _ => return Ok(value.to_string()),
    };

    format_number(number, format).ok_or_else(|| GridError::InvalidFormat {
        format: format.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(x) => x,
        }
    }
}

fn format_number(number: Number, format: &str) -> Option<String> {
    let mut chars = format.chars();
    let specifier = chars.next()?;

    if specifier.is_ascii_alphabetic() {
        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else if rest.len() <= 2 && rest.chars().all(|c| c.is_ascii_digit()) {
            Some(rest.parse::<usize>().ok()?)
        } else {
            return None;
        };
        return standard(number, specifier, precision);
    }

    custom(number.as_f64(), format)
}

fn standard(number: Number, specifier: char, precision: Option<usize>) -> Option<String> {
    let x = number.as_f64();
    match specifier {
        'F' | 'f' => {
            let precision = precision.unwrap_or(2);
            Some(format!("{:.*}", precision, round_half_away(x, precision as i32)))
        }
        'N' | 'n' => Some(grouped(x, precision.unwrap_or(2))),
        'P' | 'p' => Some(format!("{}%", grouped(x * 100.0, precision.unwrap_or(2)))),
        'G' | 'g' => Some(match number {
            Number::Int(n) => n.to_string(),
            Number::Float(x) => x.to_string(),
        }),
        'E' | 'e' => Some(scientific(x, precision.unwrap_or(6), specifier == 'E')),
        'D' | 'd' => match number {
            Number::Int(n) => {
                let width = precision.unwrap_or(0);
                let digits = format!("{:0width$}", n.unsigned_abs());
                Some(if n < 0 { format!("-{digits}") } else { digits })
            }
            Number::Float(_) => None,
        },
        'X' => match number {
            Number::Int(n) => Some(format!("{:0width$X}", n, width = precision.unwrap_or(0))),
            Number::Float(_) => None,
        },
        'x' => match number {
            Number::Int(n) => Some(format!("{:0width$x}", n, width = precision.unwrap_or(0))),
            Number::Float(_) => None,
        },
        _ => None,
    }
}

/// `1.234560E+003` style output.
fn scientific(x: f64, precision: usize, upper: bool) -> String {
    let rounded = if x == 0.0 || !x.is_finite() {
        x
    } else {
        let exponent = x.abs().log10().floor() as i32;
        round_half_away(x, precision as i32 - exponent)
    };
    let raw = format!("{:.*e}", precision, rounded);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let marker = if upper { 'E' } else { 'e' };
    format!("{mantissa}{marker}{sign}{digits:0>3}")
}

fn custom(x: f64, pattern: &str) -> Option<String> {
    if !pattern.chars().all(|c| matches!(c, '0' | '#' | ',' | '.' | '%')) {
        return None;
    }

    let percent = pattern.contains('%');
    let body: String = pattern.chars().filter(|c| *c != '%').collect();
    let (integer, fraction) = body.split_once('.').unwrap_or((body.as_str(), ""));

    if fraction.contains(',') || fraction.contains('.') {
        return None;
    }

    let group = integer.contains(',');
    let min_integer = integer.chars().filter(|c| *c == '0').count();
    let min_fraction = fraction.chars().take_while(|c| *c == '0').count();
    let max_fraction = fraction.len();

    let value = if percent { x * 100.0 } else { x };
    let fixed = format!("{:.*}", max_fraction, round_half_away(value.abs(), max_fraction as i32));
    let (int_digits, frac_digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_digits.to_string();
    while frac.len() > min_fraction && frac.ends_with('0') {
        frac.pop();
    }

    let mut int_part = int_digits.trim_start_matches('0').to_string();
    while int_part.len() < min_integer {
        int_part.insert(0, '0');
    }
    if group {
        int_part = group_thousands(&int_part);
    }

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0' || c == ',') && frac.chars().all(|c| c == '0');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&int_part);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    if out.is_empty() || out == "-" {
        out = "0".to_string();
    }
    if percent {
        out.push('%');
    }
    Some(out)
}

fn grouped(x: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, round_half_away(x.abs(), precision as i32));
    let (int_digits, frac_digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::new();
    if x < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_digits));
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

/// Round to `decimals` places with ties away from zero. `{:.*}` alone
/// rounds ties to even.
fn round_half_away(x: f64, decimals: i32) -> f64 {
    if decimals < 0 {
        let scale = 10f64.powi(-decimals);
        return (x / scale).round() * scale;
    }
    let scale = 10f64.powi(decimals);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / scale
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(125.0, -1), 130.0);
    }

    #[test]
    fn test_scientific_exponent_padding() {
        assert_eq!(scientific(1234.56, 6, true), "1.234560E+003");
        assert_eq!(scientific(0.00012, 2, false), "1.20e-004");
    }
}
