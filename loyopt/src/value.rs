use std::fmt;

use crate::error::{LoyoptError, Result};
use crate::format::{c_format_g, FormatSpec, IntArg};
use crate::numeric;
use crate::status::OptionStatus;

/// Payload-free discriminant of [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Str,
    Int32,
    UInt32,
    Int64,
    Float,
    Double,
}

impl ValueKind {
    pub fn is_integer(self) -> bool {
        matches!(self, ValueKind::Int32 | ValueKind::UInt32 | ValueKind::Int64)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, ValueKind::Float | ValueKind::Double)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_floating()
    }

    /// Lowest and highest representable values of the kind.
    ///
    /// Bool spans `false..=true`; String has no range and returns two
    /// empty strings.
    pub fn full_range(self) -> (Value, Value) {
        match self {
            ValueKind::Bool => (Value::Bool(false), Value::Bool(true)),
            ValueKind::Str => (Value::Str(String::new()), Value::Str(String::new())),
            ValueKind::Int32 => (Value::Int32(i32::MIN), Value::Int32(i32::MAX)),
            ValueKind::UInt32 => (Value::UInt32(u32::MIN), Value::UInt32(u32::MAX)),
            ValueKind::Int64 => (Value::Int64(i64::MIN), Value::Int64(i64::MAX)),
            ValueKind::Float => (Value::Float(f32::MIN), Value::Float(f32::MAX)),
            ValueKind::Double => (Value::Double(f64::MIN), Value::Double(f64::MAX)),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Str => "string",
            ValueKind::Int32 => "int32",
            ValueKind::UInt32 => "uint32",
            ValueKind::Int64 => "int64",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
        };
        write!(f, "{}", name)
    }
}

/// One option value of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Str(String),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    Float(f32),
    Double(f64),
}

/// Clamp `v` into `[min, max]` and report which side, if any, was hit.
fn clamp<T: PartialOrd + Copy>(v: T, min: T, max: T) -> (T, OptionStatus) {
    if v < min {
        (min, OptionStatus::ClampedMin)
    } else if v > max {
        (max, OptionStatus::ClampedMax)
    } else {
        (v, OptionStatus::Parsed)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Str(_) => ValueKind::Str,
            Value::Int32(_) => ValueKind::Int32,
            Value::UInt32(_) => ValueKind::UInt32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
        }
    }

    /// Read `text` as a value of the same kind as `min`/`max`, clamped into
    /// that range.
    ///
    /// Returns `None` when the text is not a valid literal for the kind
    /// (trailing characters, no digits, or NaN for floating kinds). An empty
    /// text reads as zero for numeric kinds. Bool values never read text:
    /// the caller sets them directly.
    pub(crate) fn read(text: &str, base: u32, min: &Value, max: &Value) -> Option<(Value, OptionStatus)> {
        match (min, max) {
            (Value::Bool(_), _) => Some((Value::Bool(true), OptionStatus::Parsed)),
            (Value::Str(_), _) => Some((Value::Str(text.to_string()), OptionStatus::Parsed)),
            (Value::Int32(lo), Value::Int32(hi)) => {
                let v = numeric::parse_int(text, base)?;
                let (v, status) = clamp(v, *lo as i64, *hi as i64);
                Some((Value::Int32(v as i32), status))
            }
            (Value::UInt32(lo), Value::UInt32(hi)) => {
                let v = numeric::parse_int(text, base)?;
                let (v, status) = clamp(v, *lo as i64, *hi as i64);
                Some((Value::UInt32(v as u32), status))
            }
            (Value::Int64(lo), Value::Int64(hi)) => {
                let v = numeric::parse_int(text, base)?;
                let (v, status) = clamp(v, *lo, *hi);
                Some((Value::Int64(v), status))
            }
            (Value::Float(lo), Value::Float(hi)) => {
                let v = numeric::parse_float(text).filter(|v| !v.is_nan())?;
                let (v, status) = clamp(v, *lo as f64, *hi as f64);
                Some((Value::Float(v as f32), status))
            }
            (Value::Double(lo), Value::Double(hi)) => {
                let v = numeric::parse_float(text).filter(|v| !v.is_nan())?;
                let (v, status) = clamp(v, *lo, *hi);
                Some((Value::Double(v), status))
            }
            // min and max always share a kind
            _ => None,
        }
    }

    fn int_arg(&self) -> Option<IntArg> {
        match *self {
            Value::Int32(n) => Some(IntArg {
                signed: n as i64,
                bits: n as u32 as u64,
            }),
            Value::UInt32(n) => Some(IntArg {
                signed: n as i64,
                bits: n as u64,
            }),
            Value::Int64(n) => Some(IntArg {
                signed: n,
                bits: n as u64,
            }),
            _ => None,
        }
    }

    fn float_arg(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    /// Render with an optional printf-style format string.
    ///
    /// Bool and String values ignore `fmt`. Without `fmt`, integers render
    /// in decimal and floating kinds with six fractional digits.
    pub fn render(&self, fmt: Option<&str>) -> Result<String> {
        let Some(fmt) = fmt else {
            return Ok(self.to_string());
        };
        match self {
            Value::Bool(_) | Value::Str(_) => Ok(self.to_string()),
            _ => {
                let spec = FormatSpec::parse(fmt)?;
                let mismatch = || LoyoptError::FormatMismatch {
                    spec: fmt.to_string(),
                    kind: self.kind(),
                };
                if spec.conv.is_integer() {
                    self.int_arg()
                        .map(|arg| spec.format_int(arg))
                        .ok_or_else(mismatch)
                } else {
                    self.float_arg()
                        .map(|v| spec.format_float(v))
                        .ok_or_else(mismatch)
                }
            }
        }
    }

    /// Render a number the way the help block shows it: integers with a
    /// base prefix for base 16 (`0x`) and 8 (`0`), decimal for any other
    /// base; floats in `%g` style. Zero never gets a prefix.
    pub(crate) fn help_text(&self, base: u32) -> String {
        if let Some(arg) = self.int_arg() {
            return match base {
                16 if arg.bits != 0 => format!("{:#x}", arg.bits),
                8 if arg.bits != 0 => format!("0{:o}", arg.bits),
                _ => arg.signed.to_string(),
            };
        }
        match self {
            Value::Float(v) => c_format_g(*v as f64, 6, false, false),
            Value::Double(v) => c_format_g(*v, 6, false, false),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Str(s) => write!(f, "{}", s),
            Value::Int32(n) => write!(f, "{}", n),
            Value::UInt32(n) => write!(f, "{}", n),
            Value::Int64(n) => write!(f, "{}", n),
            Value::Float(v) => write!(f, "{:.6}", v),
            Value::Double(v) => write!(f, "{:.6}", v),
        }
    }
}
