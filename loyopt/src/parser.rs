//! Argument tokenizer and matcher.
//!
//! The parser is stateful across calls. Every token carries a consumed flag
//! that only ever goes from `false` to `true`; each [`OptionParser::parse`]
//! marks the tokens it claims (the matched name and, for value options, the
//! token after it). Consequently the order in which declarations are parsed
//! matters:
//!
//! - the first token equal to a declaration's name wins, later occurrences
//!   stay unclaimed and show up in [`OptionParser::unparsed_args`];
//! - the name scan ignores the consumed flag, so a token already claimed as
//!   another option's value can still be matched as a name;
//! - parsing the same declaration twice is unsupported.
//!
//! Query the unparsed tokens only after every declaration of interest has
//! been parsed.

use std::io::Write;

use crate::error::Result;
use crate::option::sealed::{DeclMut, Key};
use crate::option::AnyOption;
use crate::status::OptionStatus;
use crate::value::ValueKind;

#[derive(Debug, Clone)]
struct Token {
    text: String,
    consumed: bool,
}

impl Token {
    fn new(text: String) -> Self {
        Token {
            text,
            consumed: false,
        }
    }
}

/// `-abc` style argument that expands to `-a -b -c`.
///
/// Needs at least three characters, a single leading dash, and a second
/// character that is alphanumeric but not a decimal digit, so negative
/// numbers like `-123` or `-1x` stay intact.
fn is_short_cluster(arg: &str) -> bool {
    let mut chars = arg.chars();
    if chars.next() != Some('-') {
        return false;
    }
    match chars.next() {
        Some(c) if c.is_alphanumeric() && !c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.next().is_some()
}

/// Text after the last `/` or `\`, or the whole path.
fn short_exec_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

pub struct OptionParser {
    tokens: Vec<Token>,
    exec_name: String,
}

impl OptionParser {
    /// Tokenize a full argument list whose first element is the program
    /// path, as `std::env::args()` yields it.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut tokens = Vec::new();
        let mut exec_name = String::new();

        if let Some(path) = args.next() {
            exec_name = short_exec_name(&path).to_string();
            tokens.push(Token {
                text: path,
                consumed: true,
            });
        }

        for arg in args {
            if is_short_cluster(&arg) {
                for c in arg.chars().skip(1) {
                    tokens.push(Token::new(format!("-{}", c)));
                }
            } else {
                tokens.push(Token::new(arg));
            }
        }

        for (i, token) in tokens.iter().enumerate() {
            tracing::debug!(index = i, token = %token.text, "argument token");
        }

        OptionParser { tokens, exec_name }
    }

    /// Tokenize the arguments of the running process. Arguments that are
    /// not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }

    /// Number of tokens, including the program path.
    pub fn num_args(&self) -> usize {
        self.tokens.len()
    }

    /// Program name with any directory stripped.
    pub fn exec_name(&self) -> &str {
        &self.exec_name
    }

    /// Token texts after short-flag expansion, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }

    /// Match one declaration against the tokens and update its status and
    /// value in place. Returns the resulting status.
    pub fn parse<O: AnyOption + ?Sized>(&mut self, opt: &mut O) -> OptionStatus {
        let decl = opt.decl_mut(Key);

        match self.tokens.iter().position(|t| decl.name_match(&t.text)) {
            None => decl.set_not_found(),
            Some(i) => {
                self.tokens[i].consumed = true;
                if decl.kind() == ValueKind::Bool {
                    decl.set_flag();
                } else if let Some(next) = self.tokens.get_mut(i + 1) {
                    next.consumed = true;
                    decl.accept(&next.text);
                } else {
                    decl.set_value_missing();
                }
            }
        }

        tracing::debug!(summary = %decl.summary(), "option parsed");
        decl.status()
    }

    /// Parse every declaration in order. Returns how many ended `Parsed`.
    pub fn parse_all(&mut self, opts: &mut [&mut dyn AnyOption]) -> usize {
        opts.iter_mut()
            .map(|opt| self.parse(&mut **opt))
            .filter(|&status| status == OptionStatus::Parsed)
            .count()
    }

    /// First token nothing has claimed, or `""` when every token was.
    pub fn first_unparsed_arg(&self) -> &str {
        self.tokens
            .iter()
            .find(|t| !t.consumed)
            .map_or("", |t| t.text.as_str())
    }

    /// All tokens nothing has claimed, in order: unknown options, their
    /// stray values, repeated options and bare arguments.
    pub fn unparsed_args(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| !t.consumed)
            .map(|t| t.text.as_str())
            .collect()
    }

    /// Write a usage header followed by the help block of each option.
    pub fn write_help<W: Write>(&self, out: &mut W, opts: &[&dyn AnyOption]) -> Result<()> {
        write!(out, "Usage: {} [option1] [option2] ...\n", self.exec_name)?;
        write!(out, "options:\n")?;
        for opt in opts {
            out.write_all(opt.decl().help_block().as_bytes())?;
        }
        Ok(())
    }
}
