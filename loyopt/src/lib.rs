//! Declarative command-line option parsing.
//!
//! Declare typed options ([`Opt`]), tokenize the argument list once
//! ([`OptionParser::new`]), then parse each declaration against it. Parsing
//! never fails: the outcome of each option is an [`OptionStatus`] and its
//! value falls back to the declared default whenever nothing usable was
//! found.
//!
//! - boolean flags, strings, `i32`, `u32`, `i64`, `f32` and `f64` values
//! - default values, optional `[min, max]` ranges with clamping
//! - integer literals in any base from 2 to 36
//! - merged short flags: `-abc` reads as `-a -b -c`
//! - leftover tokens reported after parsing
//!
//! ```
//! use loyopt::{Opt, OptionParser, OptionStatus};
//!
//! let mut help = Opt::flag("-?").alt("--help");
//! let mut level = Opt::new(50i32, "-g").alt("--level").range(0, 100);
//! let mut mask = Opt::new(0u32, "--mask").base(16);
//!
//! let mut parser = OptionParser::new(["./tool", "-g", "1000", "--mask", "0xff", "extra"]);
//! parser.parse(&mut help);
//! parser.parse(&mut level);
//! parser.parse(&mut mask);
//!
//! assert_eq!(help.status(), OptionStatus::NotFound);
//! assert_eq!(level.status(), OptionStatus::ClampedMax);
//! assert_eq!(*level.value(), 100);
//! assert_eq!(*mask.value(), 0xff);
//! assert_eq!(parser.unparsed_args(), vec!["extra"]);
//! ```

pub mod error;
mod format;
mod help;
mod numeric;
pub mod option;
pub mod parser;
pub mod status;
pub mod value;

pub use error::{LoyoptError, Result};
pub use option::{AnyOption, Integer, Numeric, Opt, OptionDecl, OptionType, Valued};
pub use parser::OptionParser;
pub use status::OptionStatus;
pub use value::{Value, ValueKind};
