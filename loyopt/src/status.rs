use std::fmt;

/// How far parsing got for one option.
///
/// Every declaration starts at `NotParsed`. One call to
/// [`OptionParser::parse`](crate::OptionParser::parse) moves it to exactly one
/// of the other states. The variant order is meaningful: later variants got
/// further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum OptionStatus {
    /// Not yet matched against any argument list.
    #[default]
    NotParsed,
    /// Matched against the arguments, name absent.
    NotFound,
    /// Name present, but the following token is not a valid literal.
    ValueInvalid,
    /// Name present as the last token, so there is no value to read.
    ValueNotFound,
    /// Value above the upper bound, replaced by the bound.
    ClampedMax,
    /// Value below the lower bound, replaced by the bound.
    ClampedMin,
    /// Value read and within bounds.
    Parsed,
}

impl OptionStatus {
    /// True when the option's name appeared in the arguments.
    pub fn is_name_exist(self) -> bool {
        !matches!(self, OptionStatus::NotParsed | OptionStatus::NotFound)
    }

    /// True when the option holds a value read from the arguments
    /// (possibly clamped into range).
    pub fn is_value_updated(self) -> bool {
        matches!(
            self,
            OptionStatus::Parsed | OptionStatus::ClampedMax | OptionStatus::ClampedMin
        )
    }

    /// Fixed-width human readable label, suitable for column output.
    pub fn label(self) -> &'static str {
        match self {
            OptionStatus::NotParsed => "Opt Not Parsed",
            OptionStatus::NotFound => "Opt Not Found ",
            OptionStatus::ValueInvalid => "Value Invalid ",
            OptionStatus::ValueNotFound => "Value NotFound",
            OptionStatus::ClampedMax => "Clamped To Max",
            OptionStatus::ClampedMin => "Clamped To Min",
            OptionStatus::Parsed => "Parsed Success",
        }
    }
}

impl fmt::Display for OptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OptionStatus; 7] = [
        OptionStatus::NotParsed,
        OptionStatus::NotFound,
        OptionStatus::ValueInvalid,
        OptionStatus::ValueNotFound,
        OptionStatus::ClampedMax,
        OptionStatus::ClampedMin,
        OptionStatus::Parsed,
    ];

    #[test]
    fn default_is_not_parsed() {
        assert_eq!(OptionStatus::default(), OptionStatus::NotParsed);
    }

    #[test]
    fn name_exist_predicate() {
        let existing: Vec<_> = ALL.iter().filter(|s| s.is_name_exist()).collect();
        assert_eq!(existing.len(), 5);
        assert!(!OptionStatus::NotParsed.is_name_exist());
        assert!(!OptionStatus::NotFound.is_name_exist());
        assert!(OptionStatus::ValueNotFound.is_name_exist());
    }

    #[test]
    fn value_updated_predicate() {
        for s in ALL {
            let expected = matches!(
                s,
                OptionStatus::Parsed | OptionStatus::ClampedMax | OptionStatus::ClampedMin
            );
            assert_eq!(s.is_value_updated(), expected, "{:?}", s);
        }
    }

    #[test]
    fn labels_are_fixed_width() {
        for s in ALL {
            assert_eq!(s.label().len(), 14, "{:?}", s);
        }
    }

    #[test]
    fn display_trims_padding() {
        assert_eq!(OptionStatus::NotFound.to_string(), "Opt Not Found");
        assert_eq!(OptionStatus::Parsed.to_string(), "Parsed Success");
    }

    #[test]
    fn ordering_follows_progress() {
        assert!(OptionStatus::NotParsed < OptionStatus::NotFound);
        assert!(OptionStatus::ClampedMin < OptionStatus::Parsed);
    }
}
