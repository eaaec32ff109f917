//! Numeric literal readers with C library semantics.
//!
//! `parse_int` behaves like `strtoll` and `parse_float` like `strtod`, except
//! that both insist on consuming the whole text: anything left over after the
//! literal makes the result `None`. An empty text has nothing left over and
//! reads as zero, while text with no digits (`" "`, `"-"`) is rejected.

fn is_c_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(text: &str) -> &str {
    let start = text.bytes().take_while(|&c| is_c_space(c)).count();
    &text[start..]
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Read an integer literal in `base` (2..=36).
///
/// Leading whitespace and a sign are accepted, and base 16 allows an
/// optional `0x`/`0X` prefix. Out-of-range magnitudes saturate to the i64
/// limits. Returns `None` when no digit was read or when trailing text
/// remains; the empty string is 0.
pub fn parse_int(text: &str, base: u32) -> Option<i64> {
    if text.is_empty() {
        return Some(0);
    }
    let (negative, rest) = split_sign(skip_space(text));

    let mut digits = rest;
    if base == 16 {
        let b = rest.as_bytes();
        if b.len() > 2 && b[0] == b'0' && (b[1] | 0x20) == b'x' && b[2].is_ascii_hexdigit() {
            digits = &rest[2..];
        }
    }

    let mut magnitude: u128 = 0;
    let mut count = 0usize;
    for c in digits.chars() {
        let Some(d) = c.to_digit(base) else {
            break;
        };
        // Anything past 2^64 saturates anyway.
        if magnitude <= u64::MAX as u128 {
            magnitude = magnitude * base as u128 + d as u128;
        }
        count += 1;
    }
    if count == 0 || count < digits.len() {
        return None;
    }

    let value = if negative {
        if magnitude > i64::MAX as u128 + 1 {
            i64::MIN
        } else {
            (-(magnitude as i128)) as i64
        }
    } else if magnitude > i64::MAX as u128 {
        i64::MAX
    } else {
        magnitude as i64
    };
    Some(value)
}

/// Read a floating point literal without regard to locale.
///
/// Accepts decimal notation with an optional exponent, `inf`/`infinity`,
/// `nan` and C99 hexadecimal floats such as `0x1.8p3`. Returns `None` when
/// trailing text remains or nothing was read; the empty string is 0.
pub fn parse_float(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }
    let trimmed = skip_space(text);
    let (negative, rest) = split_sign(trimmed);
    let b = rest.as_bytes();
    if b.len() > 2 && b[0] == b'0' && (b[1] == b'x' || b[1] == b'X') {
        return parse_hex_float(&rest[2..]).map(|v| if negative { -v } else { v });
    }
    // std's grammar covers decimal, exponent, inf, infinity and nan, all
    // case-insensitive, and rejects any leftover characters.
    trimmed.parse::<f64>().ok()
}

/// Hex float body after the `0x` prefix: `h*[.h*][p[+-]d+]`, at least one
/// hex digit in the mantissa.
fn parse_hex_float(body: &str) -> Option<f64> {
    let mut mantissa = 0f64;
    let mut exponent: i64 = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    let mut chars = body.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c == '.' && !seen_point {
            seen_point = true;
        } else if let Some(d) = c.to_digit(16) {
            mantissa = mantissa * 16.0 + d as f64;
            if seen_point {
                exponent -= 4;
            }
            seen_digit = true;
        } else {
            break;
        }
        chars.next();
    }
    if !seen_digit {
        return None;
    }

    if let Some(&c) = chars.peek() {
        if c != 'p' && c != 'P' {
            return None;
        }
        chars.next();
        let exp_text: String = chars.collect();
        let (exp_negative, exp_digits) = split_sign(&exp_text);
        if exp_digits.is_empty() || !exp_digits.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let e: i64 = exp_digits.parse().unwrap_or(i64::MAX / 2);
        exponent += if exp_negative { -e } else { e };
    }

    let exponent = exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    Some(mantissa * 2f64.powi(exponent))
}
