use std::fmt::Write;

use crate::option::OptionDecl;
use crate::value::{Value, ValueKind};

fn base_note(base: u32) -> String {
    match base {
        2 => " in Binary".to_string(),
        8 => " in Octal".to_string(),
        10 => String::new(),
        16 => " in Hexadecimal".to_string(),
        b => format!(" in Base-{}", b),
    }
}

impl OptionDecl {
    /// Render this option's help block:
    ///
    /// ```text
    ///     -g <value>, --int32_g <value>, value is an integer literal, default = 50, range = [0, 100].
    ///       : first help line
    ///         further help lines
    /// ```
    pub fn help_block(&self) -> String {
        let mut out = String::new();

        if self.kind() == ValueKind::Bool {
            out.push_str("    ");
            out.push_str(self.name());
            if !self.alt_name().is_empty() {
                let _ = write!(out, ", {}", self.alt_name());
            }
        } else {
            let _ = write!(out, "    {} <value>", self.name());
            if !self.alt_name().is_empty() {
                let _ = write!(out, ", {} <value>", self.alt_name());
            }
            out.push_str(", value is ");

            let base = self.numeric_base();
            let default = self.default_value();
            match default {
                Value::Str(s) => {
                    let _ = write!(out, "a string, default = \"{}\"", s);
                }
                Value::Int32(_) | Value::Int64(_) => {
                    let _ = write!(
                        out,
                        "an integer literal{}, default = {}",
                        base_note(base),
                        default.help_text(base)
                    );
                }
                Value::UInt32(_) => {
                    let _ = write!(
                        out,
                        "an unsigned integer literal{}, default = {}",
                        base_note(base),
                        default.help_text(base)
                    );
                }
                Value::Float(_) | Value::Double(_) => {
                    let _ = write!(
                        out,
                        "a floating point literal, default = {}",
                        default.help_text(base)
                    );
                }
                Value::Bool(_) => {}
            }

            if self.is_range_restricted() {
                let _ = write!(
                    out,
                    ", range = [{}, {}]",
                    self.min().help_text(base),
                    self.max().help_text(base)
                );
            }
            out.push('.');
        }
        out.push('\n');

        let mut lines = self.help_lines().iter();
        if let Some(first) = lines.next() {
            let _ = writeln!(out, "      : {}", first);
        }
        for line in lines {
            let _ = writeln!(out, "        {}", line);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::option::Opt;

    #[test]
    fn bool_block() {
        let o = Opt::flag("-?").alt("--help").help("Print this help info.");
        assert_eq!(o.help_block(), "    -?, --help\n      : Print this help info.\n");
    }

    #[test]
    fn bool_block_without_help() {
        assert_eq!(Opt::flag("-a").help_block(), "    -a\n");
    }

    #[test]
    fn continuation_lines_are_indented() {
        let o = Opt::flag("-b")
            .alt("--bool_b")
            .help("Test option b, help info line 1,")
            .help("    help info line 2.");
        assert_eq!(
            o.help_block(),
            "    -b, --bool_b\n      : Test option b, help info line 1,\n            help info line 2.\n"
        );
    }

    #[test]
    fn string_block() {
        let o = Opt::new("a string for d".to_string(), "-d").alt("--string_d");
        assert_eq!(
            o.help_block(),
            "    -d <value>, --string_d <value>, value is a string, default = \"a string for d\".\n"
        );
    }

    #[test]
    fn ranged_integer_block() {
        let o = Opt::new(50i32, "-g").alt("--int32_g").range(0, 100);
        assert_eq!(
            o.help_block(),
            "    -g <value>, --int32_g <value>, value is an integer literal, default = 50, range = [0, 100].\n"
        );
    }

    #[test]
    fn hex_integer_block() {
        let o = Opt::new(0i32, "--int32_i").base(16).range(0, 0xffff);
        assert_eq!(
            o.help_block(),
            "    --int32_i <value>, value is an integer literal in Hexadecimal, default = 0, range = [0, 0xffff].\n"
        );
        let o = Opt::new(255i32, "-h").base(16);
        assert!(o.help_block().contains("default = 0xff."));
    }

    #[test]
    fn other_base_notes() {
        assert!(Opt::new(0u32, "-x").base(2).help_block().contains("unsigned integer literal in Binary"));
        assert!(Opt::new(0i64, "-x").base(8).help_block().contains("in Octal"));
        assert!(Opt::new(0i32, "-x").base(36).help_block().contains("in Base-36"));
    }

    #[test]
    fn float_blocks() {
        let o = Opt::new(0f32, "--float_m").range(-10.0, 100.0);
        assert_eq!(
            o.help_block(),
            "    --float_m <value>, value is a floating point literal, default = 0, range = [-10, 100].\n"
        );
        let o = Opt::new(0f64, "-n").alt("--double_n");
        assert_eq!(
            o.help_block(),
            "    -n <value>, --double_n <value>, value is a floating point literal, default = 0.\n"
        );
    }

    #[test]
    fn one_sided_range_is_not_shown() {
        let o = Opt::new(5i32, "-x").range(0, i32::MAX);
        assert_eq!(
            o.help_block(),
            "    -x <value>, value is an integer literal, default = 5.\n"
        );
        let o = Opt::new(150u32, "-j").range(0, 200);
        assert!(!o.help_block().contains("range"));
    }

    #[test]
    fn int64_range_in_decimal() {
        let o = Opt::new(0i64, "--int64_k").range(-10_000_000_000, 10_000_000_000);
        assert!(o
            .help_block()
            .contains("range = [-10000000000, 10000000000]."));
    }
}
