use crate::model::Initial;
use crate::parser::synopsis_line;

/// The declaration of one recognized Cli option.
///
/// A declaration is immutable: parsing never writes back into it.
/// The parse outcome of each option is found on [`Parsed`](./struct.Parsed.html), keyed by this declaration's `key`.
///
/// ### Example
/// ```
/// # use nanoargs_builder as nanoargs;
/// use nanoargs::CliOption;
///
/// let option = CliOption::required("p", "<password>", "sets the password for encryption");
/// assert_eq!(
///     option.synopsis(),
///     "\t-p <password> - sets the password for encryption (required option)\n"
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CliOption {
    key: String,
    initial: Initial,
    meaning: Option<String>,
    description: String,
    synopsis: String,
}

impl CliOption {
    /// Declare an option.
    ///
    /// `key` is the option name without its leading dash (ex: `"d"` for `-d`).
    /// `meaning` is the value placeholder shown in the synopsis; it is ignored for [`Initial::Flag`].
    pub fn new(
        key: impl Into<String>,
        initial: Initial,
        meaning: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let description = description.into();
        let meaning = match initial {
            Initial::Flag => None,
            _ => meaning,
        };
        let synopsis = synopsis_line(&key, &initial, meaning.as_deref(), &description);

        Self {
            key,
            initial,
            meaning,
            description,
            synopsis,
        }
    }

    /// Declare a flag option: a switch that consumes no value.
    ///
    /// ### Example
    /// ```
    /// # use nanoargs_builder as nanoargs;
    /// use nanoargs::CliOption;
    ///
    /// let option = CliOption::flag("rev", "if set, activates reverse order of processing");
    /// assert!(option.initial().is_flag());
    /// ```
    pub fn flag(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(key, Initial::Flag, None, description)
    }

    /// Declare a value option that must be specified on the Cli.
    pub fn required(
        key: impl Into<String>,
        meaning: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(key, Initial::Required, Some(meaning.into()), description)
    }

    /// Declare a value option which falls back to `default` when not specified on the Cli.
    ///
    /// ### Example
    /// ```
    /// # use nanoargs_builder as nanoargs;
    /// use nanoargs::CliOption;
    ///
    /// let option = CliOption::with_default("d", ".", "<directory>", "sets current directory for processing");
    /// assert_eq!(option.initial().default_value(), Some("."));
    /// ```
    pub fn with_default(
        key: impl Into<String>,
        default: impl Into<String>,
        meaning: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            key,
            Initial::Default(default.into()),
            Some(meaning.into()),
            description,
        )
    }

    /// The option key, without the leading dash.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How the option's value is determined.
    pub fn initial(&self) -> &Initial {
        &self.initial
    }

    /// The value placeholder text (`None` for flags).
    pub fn meaning(&self) -> Option<&str> {
        self.meaning.as_deref()
    }

    /// The option description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The synopsis line for this option, including its leading tab and trailing newline.
    ///
    /// This is fixed at declaration time.
    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }
}

impl std::fmt::Debug for CliOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let meaning = match &self.meaning {
            Some(m) => format!(" {m}"),
            None => "".to_string(),
        };

        write!(
            f,
            "Opt[-{key}{meaning}, {initial}, {description}]",
            key = self.key,
            initial = self.initial,
            description = self.description,
        )
    }
}
