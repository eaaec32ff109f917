//! Option declarations.
//!
//! [`OptionDecl`] is the type-erased record the parser works on: names,
//! numeric base, default/min/max/current [`Value`], status and help text.
//! [`Opt<T>`] wraps one with a typed front end so callers read `&i32`,
//! `&String` and so on instead of matching on `Value`.

use std::marker::PhantomData;
use std::ops::Deref;

use crate::error::Result;
use crate::status::OptionStatus;
use crate::value::{Value, ValueKind};

/// Which spelling matched most recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matched {
    Name,
    AltName,
}

#[derive(Debug, Clone)]
pub struct OptionDecl {
    name: String,
    alt_name: String,
    matched: Option<Matched>,
    base: u32,
    default_value: Value,
    value: Value,
    min: Value,
    max: Value,
    status: OptionStatus,
    help_lines: Vec<String>,
}

impl OptionDecl {
    fn new(name: &str, default_value: Value) -> Self {
        let (min, max) = default_value.kind().full_range();
        OptionDecl {
            name: name.to_string(),
            alt_name: String::new(),
            matched: None,
            base: 10,
            value: default_value.clone(),
            default_value,
            min,
            max,
            status: OptionStatus::NotParsed,
            help_lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative spelling, empty when none was given.
    pub fn alt_name(&self) -> &str {
        &self.alt_name
    }

    /// The spelling that matched most recently, empty before any match.
    pub fn last_matched_name(&self) -> &str {
        match self.matched {
            Some(Matched::Name) => &self.name,
            Some(Matched::AltName) => &self.alt_name,
            None => "",
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.default_value.kind()
    }

    /// Numeric base for integer literals, 2..=36. Always 10 for other kinds.
    pub fn numeric_base(&self) -> u32 {
        self.base
    }

    pub fn status(&self) -> OptionStatus {
        self.status
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    pub fn is_name_exist(&self) -> bool {
        self.status.is_name_exist()
    }

    pub fn is_value_updated(&self) -> bool {
        self.status.is_value_updated()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    pub fn min(&self) -> &Value {
        &self.min
    }

    pub fn max(&self) -> &Value {
        &self.max
    }

    /// True when both bounds were narrowed from the kind's full range.
    /// A one-sided range still clamps but is not announced in help.
    pub fn is_range_restricted(&self) -> bool {
        if !self.kind().is_numeric() {
            return false;
        }
        let (lo, hi) = self.kind().full_range();
        self.min != lo && self.max != hi
    }

    /// Current value as text; `fmt` is an optional printf-style format
    /// applied to numeric kinds.
    pub fn value_string(&self, fmt: Option<&str>) -> Result<String> {
        self.value.render(fmt)
    }

    pub fn default_value_string(&self, fmt: Option<&str>) -> Result<String> {
        self.default_value.render(fmt)
    }

    pub fn min_string(&self, fmt: Option<&str>) -> Result<String> {
        self.min.render(fmt)
    }

    pub fn max_string(&self, fmt: Option<&str>) -> Result<String> {
        self.max.render(fmt)
    }

    /// One-line summary such as `[Clamped To Max] -g, --int32_g = 100`.
    ///
    /// Strings are quoted and base-16 integers shown as `0x..`.
    pub fn summary(&self) -> String {
        let mut out = format!("[{}] {}", self.status.label(), self.name);
        if !self.alt_name.is_empty() {
            out.push_str(", ");
            out.push_str(&self.alt_name);
        }
        let value = match &self.value {
            Value::Str(s) => format!("\"{}\"", s),
            v if self.base == 16 => v
                .render(Some("0x%x"))
                .unwrap_or_else(|_| v.to_string()),
            v => v.to_string(),
        };
        out.push_str(" = ");
        out.push_str(&value);
        out
    }

    pub fn help_lines(&self) -> &[String] {
        &self.help_lines
    }

    pub fn push_help_line(&mut self, line: &str) {
        self.help_lines.push(line.to_string());
    }

    // ---- parser-side mutation ----

    /// Record a match if `token` is one of this option's spellings.
    ///
    /// Empty spellings never match. An option declared without an
    /// alternative name has an empty `alt_name`; comparing it literally would
    /// let that option claim an empty `""` argument (and, for value options,
    /// the token after it), so such arguments are left for
    /// [`OptionParser::unparsed_args`](crate::OptionParser::unparsed_args).
    pub(crate) fn name_match(&mut self, token: &str) -> bool {
        if !self.name.is_empty() && self.name == token {
            self.matched = Some(Matched::Name);
            true
        } else if !self.alt_name.is_empty() && self.alt_name == token {
            self.matched = Some(Matched::AltName);
            true
        } else {
            false
        }
    }

    pub(crate) fn set_not_found(&mut self) {
        self.value = self.default_value.clone();
        self.status = OptionStatus::NotFound;
    }

    pub(crate) fn set_value_missing(&mut self) {
        self.value = self.default_value.clone();
        self.status = OptionStatus::ValueNotFound;
    }

    pub(crate) fn set_flag(&mut self) {
        self.value = Value::Bool(true);
        self.status = OptionStatus::Parsed;
    }

    /// Read `text` as this option's value, clamping numeric kinds.
    pub(crate) fn accept(&mut self, text: &str) {
        match Value::read(text, self.base, &self.min, &self.max) {
            Some((value, status)) => {
                self.value = value;
                self.status = status;
            }
            None => {
                tracing::trace!(option = %self.name, text, "rejected value literal");
                self.value = self.default_value.clone();
                self.status = OptionStatus::ValueInvalid;
            }
        }
    }
}

/// Common capability of every declaration, used to iterate over options of
/// different value types through one non-owning view.
///
/// Callers only get shared access to the record. Mutation goes through the
/// parser, which keeps the stored kind in step with the typed handle:
///
/// ```compile_fail
/// use loyopt::{AnyOption, Opt};
///
/// let mut a = Opt::new(1i32, "-a");
/// let any: &mut dyn AnyOption = &mut a;
/// any.decl_mut();
/// ```
pub trait AnyOption: sealed::DeclMut {
    fn decl(&self) -> &OptionDecl;
}

impl AnyOption for OptionDecl {
    fn decl(&self) -> &OptionDecl {
        self
    }
}

impl sealed::DeclMut for OptionDecl {
    fn decl_mut(&mut self, _: sealed::Key) -> &mut OptionDecl {
        self
    }
}

pub(crate) mod sealed {
    use super::OptionDecl;

    pub trait Sealed {}

    /// Only nameable inside the crate, so `decl_mut` cannot be called from
    /// outside even through a trait object.
    pub struct Key;

    pub trait DeclMut {
        fn decl_mut(&mut self, _: Key) -> &mut OptionDecl;
    }
}

/// Rust types an [`Opt`] can hold.
pub trait OptionType: sealed::Sealed + Clone + PartialOrd {
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    /// Borrow the payload of `value`. Only called on values whose kind is
    /// `Self::KIND`.
    fn peek(value: &Value) -> &Self;
}

/// Option types that take a value token (everything but `bool`).
pub trait Valued: OptionType {}

/// Numeric option types: accept a range.
pub trait Numeric: Valued + Copy {}

/// Integer option types: accept a range and a base.
pub trait Integer: Numeric {}

macro_rules! option_type {
    ($t:ty, $kind:ident) => {
        impl sealed::Sealed for $t {}

        impl OptionType for $t {
            const KIND: ValueKind = ValueKind::$kind;

            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            fn peek(value: &Value) -> &Self {
                match value {
                    Value::$kind(v) => v,
                    other => unreachable!(
                        "{} option holds a {} value",
                        ValueKind::$kind,
                        other.kind()
                    ),
                }
            }
        }
    };
}

option_type!(bool, Bool);
option_type!(String, Str);
option_type!(i32, Int32);
option_type!(u32, UInt32);
option_type!(i64, Int64);
option_type!(f32, Float);
option_type!(f64, Double);

impl Valued for String {}
impl Valued for i32 {}
impl Valued for u32 {}
impl Valued for i64 {}
impl Valued for f32 {}
impl Valued for f64 {}

impl Numeric for i32 {}
impl Numeric for u32 {}
impl Numeric for i64 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

impl Integer for i32 {}
impl Integer for u32 {}
impl Integer for i64 {}

/// A typed option declaration.
///
/// ```
/// use loyopt::{Opt, OptionParser};
///
/// let mut verbose = Opt::flag("-v").alt("--verbose");
/// let mut level = Opt::new(50i32, "-g").range(0, 100);
///
/// let mut parser = OptionParser::new(["prog", "-v", "-g", "1000"]);
/// parser.parse(&mut verbose);
/// parser.parse(&mut level);
/// assert!(*verbose.value());
/// assert_eq!(*level.value(), 100);
/// ```
///
/// The record behind a handle cannot be swapped for one of another kind:
///
/// ```compile_fail
/// use loyopt::Opt;
///
/// let mut a = Opt::new(1i32, "-a");
/// *a = (*Opt::new("s".to_string(), "-b")).clone();
/// ```
#[derive(Debug, Clone)]
pub struct Opt<T: OptionType> {
    decl: OptionDecl,
    _type: PhantomData<T>,
}

impl Opt<bool> {
    /// Boolean flag; defaults to `false` and becomes `true` when present.
    pub fn flag(name: &str) -> Self {
        Opt {
            decl: OptionDecl::new(name, Value::Bool(false)),
            _type: PhantomData,
        }
    }
}

impl<T: Valued> Opt<T> {
    /// Value option over the type's full range.
    ///
    /// `default` is the value whenever the option is absent, has no value
    /// token, or has an invalid one.
    pub fn new(default: T, name: &str) -> Self {
        Opt {
            decl: OptionDecl::new(name, default.into_value()),
            _type: PhantomData,
        }
    }
}

impl<T: OptionType> Opt<T> {
    /// Second accepted spelling, e.g. `--help` next to `-?`.
    pub fn alt(mut self, alt_name: &str) -> Self {
        self.decl.alt_name = alt_name.to_string();
        self
    }

    /// Append one help line. The first is the description, later ones
    /// are continuation lines.
    pub fn help(mut self, line: &str) -> Self {
        self.decl.push_help_line(line);
        self
    }

    /// Append a help line after construction.
    pub fn push_help_line(&mut self, line: &str) {
        self.decl.push_help_line(line);
    }

    pub fn value(&self) -> &T {
        T::peek(&self.decl.value)
    }

    /// Overwrite the current value, e.g. with one derived from other
    /// options. The status is left as it is.
    pub fn set_value(&mut self, value: T) {
        self.decl.value = value.into_value();
    }

    pub fn default_value(&self) -> &T {
        T::peek(&self.decl.default_value)
    }

    pub fn min(&self) -> &T {
        T::peek(&self.decl.min)
    }

    pub fn max(&self) -> &T {
        T::peek(&self.decl.max)
    }
}

impl<T: Numeric> Opt<T> {
    /// Restrict accepted values to `[min, max]`; values outside are clamped.
    /// The bounds are swapped if given in the wrong order.
    pub fn range(mut self, min: T, max: T) -> Self {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        self.decl.min = min.into_value();
        self.decl.max = max.into_value();
        self
    }
}

impl<T: Integer> Opt<T> {
    /// Base for integer literals, clamped into 2..=36.
    pub fn base(mut self, base: u32) -> Self {
        self.decl.base = base.clamp(2, 36);
        self
    }
}

impl<T: OptionType> Deref for Opt<T> {
    type Target = OptionDecl;

    fn deref(&self) -> &OptionDecl {
        &self.decl
    }
}

impl<T: OptionType> AnyOption for Opt<T> {
    fn decl(&self) -> &OptionDecl {
        &self.decl
    }
}

impl<T: OptionType> sealed::DeclMut for Opt<T> {
    fn decl_mut(&mut self, _: sealed::Key) -> &mut OptionDecl {
        &mut self.decl
    }
}
