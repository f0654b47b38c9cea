//! Lenient conversion of raw control values into numbers.
//!
//! Page controls report strings. A value that does not start with a number
//! coerces to zero; trailing garbage after a numeric prefix is ignored
//! (`"12.5kg"` reads as `12.5`).

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse the longest leading decimal number, or zero.
pub fn decimal_or_zero(raw: &str) -> Decimal {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return Decimal::ZERO;
    }

    let mantissa = &s[..end];
    let mantissa = mantissa.strip_prefix('+').unwrap_or(mantissa);
    let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa);
    let mantissa = match mantissa.strip_prefix("-.") {
        Some(rest) => format!("-0.{rest}"),
        None => match mantissa.strip_prefix('.') {
            Some(rest) => format!("0.{rest}"),
            None => mantissa.to_string(),
        },
    };

    // Exponent is only taken when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            let exponent = s[end + 1..exp_end].trim_start_matches('+');
            return Decimal::from_scientific(&format!("{mantissa}e{exponent}"))
                .unwrap_or(Decimal::ZERO);
        }
    }

    Decimal::from_str(&mantissa).unwrap_or(Decimal::ZERO)
}

/// Parse the longest leading integer, or zero.
pub fn integer_or_zero(raw: &str) -> i64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }
    s[..end].parse::<i64>().unwrap_or(0)
}
