//! printf-style rendering of a single numeric value.
//!
//! A format string carries literal text, `%%` escapes and exactly one
//! conversion `%[flags][width][.precision][length]conv`.

use crate::error::{LoyoptError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conv {
    Signed,
    Unsigned,
    Octal,
    HexLower,
    HexUpper,
    Fixed,
    Exp { upper: bool },
    General { upper: bool },
}

impl Conv {
    pub(crate) fn is_integer(self) -> bool {
        matches!(
            self,
            Conv::Signed | Conv::Unsigned | Conv::Octal | Conv::HexLower | Conv::HexUpper
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    alt: bool,
    zero: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormatSpec {
    prefix: String,
    suffix: String,
    flags: Flags,
    width: usize,
    precision: Option<usize>,
    pub(crate) conv: Conv,
}

/// An integer handed to the formatter: the signed value plus its
/// two's complement bit pattern at the option's width.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntArg {
    pub signed: i64,
    pub bits: u64,
}

impl FormatSpec {
    pub(crate) fn parse(spec: &str) -> Result<FormatSpec> {
        let mut prefix = String::new();
        let mut chars = spec.chars().peekable();

        // literal text up to the conversion
        loop {
            match chars.next() {
                None => return Err(LoyoptError::bad_format(spec, "no conversion")),
                Some('%') if chars.peek() == Some(&'%') => {
                    chars.next();
                    prefix.push('%');
                }
                Some('%') => break,
                Some(c) => prefix.push(c),
            }
        }

        let mut flags = Flags::default();
        while let Some(&c) = chars.peek() {
            match c {
                '-' => flags.left = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '#' => flags.alt = true,
                '0' => flags.zero = true,
                _ => break,
            }
            chars.next();
        }

        let mut width = 0usize;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            width = width.saturating_mul(10).saturating_add(d as usize);
            chars.next();
        }

        let mut precision = None;
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut p = 0usize;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                p = p.saturating_mul(10).saturating_add(d as usize);
                chars.next();
            }
            precision = Some(p);
        }

        while let Some(&c) = chars.peek() {
            if matches!(c, 'h' | 'l' | 'L' | 'q' | 'j' | 'z' | 't') {
                chars.next();
            } else {
                break;
            }
        }

        let conv = match chars.next() {
            Some('d') | Some('i') => Conv::Signed,
            Some('u') => Conv::Unsigned,
            Some('o') => Conv::Octal,
            Some('x') => Conv::HexLower,
            Some('X') => Conv::HexUpper,
            Some('f') | Some('F') => Conv::Fixed,
            Some('e') => Conv::Exp { upper: false },
            Some('E') => Conv::Exp { upper: true },
            Some('g') => Conv::General { upper: false },
            Some('G') => Conv::General { upper: true },
            Some(c) => {
                return Err(LoyoptError::bad_format(
                    spec,
                    &format!("unsupported conversion '{}'", c),
                ))
            }
            None => return Err(LoyoptError::bad_format(spec, "dangling '%'")),
        };

        let mut suffix = String::new();
        while let Some(c) = chars.next() {
            if c == '%' {
                if chars.peek() == Some(&'%') {
                    chars.next();
                    suffix.push('%');
                    continue;
                }
                return Err(LoyoptError::bad_format(spec, "more than one conversion"));
            }
            suffix.push(c);
        }

        Ok(FormatSpec {
            prefix,
            suffix,
            flags,
            width,
            precision,
            conv,
        })
    }

    pub(crate) fn format_int(&self, arg: IntArg) -> String {
        let mut sign = "";
        let mut base_prefix = "";
        let mut digits = match self.conv {
            Conv::Signed => {
                if arg.signed < 0 {
                    sign = "-";
                } else if self.flags.plus {
                    sign = "+";
                } else if self.flags.space {
                    sign = " ";
                }
                arg.signed.unsigned_abs().to_string()
            }
            Conv::Unsigned => arg.bits.to_string(),
            Conv::Octal => format!("{:o}", arg.bits),
            Conv::HexLower => {
                if self.flags.alt && arg.bits != 0 {
                    base_prefix = "0x";
                }
                format!("{:x}", arg.bits)
            }
            Conv::HexUpper => {
                if self.flags.alt && arg.bits != 0 {
                    base_prefix = "0X";
                }
                format!("{:X}", arg.bits)
            }
            _ => unreachable!("integer formatting with a float conversion"),
        };

        if let Some(p) = self.precision {
            if p == 0 && arg.bits == 0 {
                digits.clear();
            } else if digits.len() < p {
                digits = format!("{}{}", "0".repeat(p - digits.len()), digits);
            }
        }
        if self.conv == Conv::Octal && self.flags.alt && !digits.starts_with('0') {
            digits.insert(0, '0');
        }

        // '0' is ignored when a precision is given for integers
        let zero_pad = self.flags.zero && self.precision.is_none();
        self.finish(sign, base_prefix, digits, zero_pad)
    }

    pub(crate) fn format_float(&self, v: f64) -> String {
        let mut sign = "";
        if v.is_sign_negative() && !v.is_nan() {
            sign = "-";
        } else if self.flags.plus {
            sign = "+";
        } else if self.flags.space {
            sign = " ";
        }
        let abs = v.abs();
        let precision = self.precision.unwrap_or(6);

        if !abs.is_finite() {
            let text = if abs.is_nan() { "nan" } else { "inf" };
            let upper = matches!(
                self.conv,
                Conv::Exp { upper: true } | Conv::General { upper: true }
            );
            let text = if upper { text.to_uppercase() } else { text.to_string() };
            return self.finish(sign, "", text, false);
        }

        let body = match self.conv {
            Conv::Fixed => {
                let s = format!("{:.*}", precision, abs);
                if self.flags.alt && precision == 0 {
                    format!("{}.", s)
                } else {
                    s
                }
            }
            Conv::Exp { upper } => c_format_e(abs, precision, upper),
            Conv::General { upper } => c_format_g(abs, precision, self.flags.alt, upper),
            _ => unreachable!("float formatting with an integer conversion"),
        };
        self.finish(sign, "", body, self.flags.zero)
    }

    fn finish(&self, sign: &str, base_prefix: &str, body: String, zero_pad: bool) -> String {
        let len = sign.len() + base_prefix.len() + body.len();
        let pad = self.width.saturating_sub(len);
        let field = if pad == 0 {
            format!("{}{}{}", sign, base_prefix, body)
        } else if self.flags.left {
            format!("{}{}{}{}", sign, base_prefix, body, " ".repeat(pad))
        } else if zero_pad {
            format!("{}{}{}{}", sign, base_prefix, "0".repeat(pad), body)
        } else {
            format!("{}{}{}{}", " ".repeat(pad), sign, base_prefix, body)
        };
        format!("{}{}{}", self.prefix, field, self.suffix)
    }
}

/// C's `%.Ne`: mantissa with `precision` decimals, exponent with a sign and
/// at least two digits.
fn c_format_e(v: f64, precision: usize, upper: bool) -> String {
    let s = format!("{:.*e}", precision, v);
    let (mantissa, exp) = match s.split_once('e') {
        Some(parts) => parts,
        None => (s.as_str(), "0"),
    };
    let (exp_sign, exp_digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    let e = if upper { 'E' } else { 'e' };
    format!("{}{}{}{:0>2}", mantissa, e, exp_sign, exp_digits)
}

/// Mimic C's %g: `precision` significant digits, fixed or scientific
/// depending on the exponent, trailing zeros removed unless `alt`.
pub(crate) fn c_format_g(v: f64, precision: usize, alt: bool, upper: bool) -> String {
    let p = if precision == 0 { 1 } else { precision };
    if v == 0.0 {
        return if alt {
            format!("{:.*}", p - 1, 0.0)
        } else {
            "0".to_string()
        };
    }

    // Exponent after rounding to p significant digits.
    let sci = format!("{:.*e}", p - 1, v);
    let exp: i32 = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    let s = if exp >= -4 && exp < p as i32 {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, v)
    } else {
        c_format_e(v, p - 1, upper)
    };
    if alt {
        return s;
    }

    // Remove trailing zeros after the decimal point, keeping any exponent.
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => s.split_at(pos),
        None => (s.as_str(), ""),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    format!("{}{}", mantissa, exponent)
}
