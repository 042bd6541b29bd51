use crate::api::CliOption;
use crate::model::Initial;
use crate::parser::ParseError;

/// The parse outcome of a single option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionState {
    processed: bool,
    supplied: Option<String>,
}

impl OptionState {
    pub(crate) fn switch_on(&mut self) {
        self.processed = true;
    }

    pub(crate) fn supply(&mut self, value: &str) {
        self.processed = true;
        self.supplied.replace(value.to_string());
    }

    /// Whether the option was encountered on the Cli.
    pub fn processed(&self) -> bool {
        self.processed
    }

    /// The value specified on the Cli (always `None` for flags).
    pub fn supplied(&self) -> Option<&str> {
        self.supplied.as_deref()
    }
}

/// The result of a successful parse.
///
/// Holds the positional arguments and the outcome of every declared option, keyed by option `key`.
/// Lookups use the first declaration with a matching key.
///
/// ### Example
/// ```
/// # use nanoargs_builder as nanoargs;
/// use nanoargs::{CliOption, OptionTable};
///
/// let table = OptionTable::new(vec![
///     CliOption::flag("rev", "reverse the order"),
///     CliOption::with_default("d", ".", "<directory>", "the directory"),
/// ]);
///
/// let parsed = table.parse_tokens(vec!["input", "-rev"].as_slice()).unwrap();
///
/// assert_eq!(parsed.positionals(), &["input".to_string()]);
/// assert_eq!(parsed.is_on("rev"), Ok(true));
/// assert_eq!(parsed.value("d"), Some("."));
/// assert!(!parsed.processed("d"));
/// ```
#[derive(Debug)]
pub struct Parsed<'t> {
    options: &'t [CliOption],
    states: Vec<OptionState>,
    positionals: Vec<String>,
}

impl<'t> Parsed<'t> {
    pub(crate) fn new(
        options: &'t [CliOption],
        states: Vec<OptionState>,
        positionals: Vec<String>,
    ) -> Self {
        assert_eq!(
            options.len(),
            states.len(),
            "internal error - each option must have precisely one state"
        );
        Self {
            options,
            states,
            positionals,
        }
    }

    fn find(&self, key: &str) -> Option<(&'t CliOption, &OptionState)> {
        let options: &'t [CliOption] = self.options;
        options
            .iter()
            .position(|option| option.key() == key)
            .map(|index| (&options[index], &self.states[index]))
    }

    /// The positional arguments, in their original relative order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Take the positional arguments, discarding the option outcomes.
    pub fn into_positionals(self) -> Vec<String> {
        self.positionals
    }

    /// The resolved value of a value option: the Cli value if specified, otherwise its default.
    ///
    /// Returns `None` for flags and undeclared keys.
    pub fn value(&self, key: &str) -> Option<&str> {
        let (option, state) = self.find(key)?;

        match option.initial() {
            Initial::Flag => None,
            Initial::Required => state.supplied(),
            Initial::Default(default) => state.supplied().or(Some(default.as_str())),
        }
    }

    /// Whether a flag option was specified on the Cli.
    ///
    /// Errors with [`ParseError::NotAFlagOption`] for a value option, and [`ParseError::UnrecognizedOption`] for an undeclared key.
    pub fn is_on(&self, key: &str) -> Result<bool, ParseError> {
        match self.find(key) {
            Some((option, state)) => {
                if option.initial().is_flag() {
                    Ok(state.processed())
                } else {
                    Err(ParseError::NotAFlagOption {
                        key: option.key().to_string(),
                    })
                }
            }
            None => Err(ParseError::UnrecognizedOption {
                token: format!("-{key}"),
            }),
        }
    }

    /// Whether the option was encountered on the Cli (`false` for undeclared keys).
    pub fn processed(&self, key: &str) -> bool {
        self.find(key)
            .map(|(_, state)| state.processed())
            .unwrap_or(false)
    }

    /// The raw parse outcome of an option.
    pub fn state(&self, key: &str) -> Option<&OptionState> {
        self.find(key).map(|(_, state)| state)
    }
}
