/// How an option's value is determined when the option is absent from the Cli.
///
/// This is the tag that separates flags from value options, and required value options from defaulted ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Initial {
    /// A no-value switch: its presence alone is the signal.
    Flag,
    /// A value option that must be specified on the Cli.
    Required,
    /// A value option that falls back to the contained default.
    Default(String),
}

impl Initial {
    /// Whether this describes a flag option.
    pub fn is_flag(&self) -> bool {
        matches!(self, Initial::Flag)
    }

    /// Whether this describes a required value option.
    pub fn is_required(&self) -> bool {
        matches!(self, Initial::Required)
    }

    /// The default value, if any.
    pub fn default_value(&self) -> Option<&str> {
        match self {
            Initial::Default(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Initial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Initial::Flag => write!(f, "flag"),
            Initial::Required => write!(f, "required"),
            Initial::Default(value) => write!(f, "default '{value}'"),
        }
    }
}
