use std::collections::HashSet;

use crate::api::{CliOption, Parsed};
use crate::parser::{
    ConfigError, ConsoleInterface, GeneralParser, ParseError, Parser, Printer, Scan,
    UserInterface,
};

#[cfg(feature = "unit_test")]
use crate::parser::util::{channel_interface, CapturedOutput};

/// The ordered set of recognized options.
///
/// The table only holds declarations; each parse produces its own [`Parsed`] result.
/// This means a table may be parsed any number of times, even concurrently.
///
/// ### Example
/// ```
/// # use nanoargs_builder as nanoargs;
/// use nanoargs::{CliOption, OptionTable};
///
/// let table = OptionTable::new(vec![
///     CliOption::required("p", "<password>", "sets the password for encryption"),
///     CliOption::flag("rev", "if set, activates reverse order of processing"),
///     CliOption::with_default("d", ".", "<directory>", "sets current directory for processing"),
/// ]);
///
/// let parsed = table
///     .parse_tokens(vec!["command", "-p", "abracadabra", "-rev", "input", "output"].as_slice())
///     .unwrap();
///
/// assert_eq!(parsed.positionals(), &["command", "input", "output"]);
/// assert_eq!(parsed.value("p"), Some("abracadabra"));
/// assert_eq!(parsed.is_on("rev"), Ok(true));
/// assert_eq!(parsed.value("d"), Some("."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTable {
    options: Vec<CliOption>,
}

impl OptionTable {
    /// Create an option table.
    ///
    /// Option keys are expected to be unique; when repeated, only the first declaration of a key is ever matched.
    pub fn new(options: Vec<CliOption>) -> Self {
        Self { options }
    }

    /// The option declarations, in declaration order.
    pub fn options(&self) -> &[CliOption] {
        &self.options
    }

    /// Find the first option declared with `key`.
    pub fn get(&self, key: &str) -> Option<&CliOption> {
        self.position(key).map(|index| &self.options[index])
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.options.iter().position(|option| option.key() == key)
    }

    /// Parse the input tokens against the declared options.
    ///
    /// Tokens starting with `-` name an option (the single leading dash is stripped to find the key).
    /// A flag option consumes only its own token, whereas a value option also consumes the following token as its value.
    /// All other tokens are positional arguments, returned in their original relative order.
    ///
    /// After all tokens are scanned, every [`Initial::Required`](./enum.Initial.html#variant.Required) option must have been specified.
    /// The first error encountered is returned; no partial result is produced.
    ///
    /// ### Example
    /// ```
    /// # use nanoargs_builder as nanoargs;
    /// use nanoargs::{CliOption, OptionTable, ParseError};
    ///
    /// let table = OptionTable::new(vec![
    ///     CliOption::required("p", "<password>", "sets the password for encryption"),
    ///     CliOption::with_default("d", ".", "<directory>", "sets current directory for processing"),
    /// ]);
    ///
    /// assert_eq!(
    ///     table.parse_tokens(vec!["input", "-d", "another directory"].as_slice()).unwrap_err(),
    ///     ParseError::MissingRequiredOption { key: "p".to_string() },
    /// );
    /// assert_eq!(
    ///     table.parse_tokens(vec!["-p", "secret", "-d"].as_slice()).unwrap_err(),
    ///     ParseError::MissingOptionValue { key: "d".to_string() },
    /// );
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Parsed<'_>, ParseError> {
        let Scan {
            states,
            positionals,
        } = Parser::new(&self.options)
            .consume(tokens)
            .map_err(|(_, error)| error)?;

        Ok(Parsed::new(&self.options, states, positionals))
    }

    /// Parse owned input tokens, such as those from [`std::env::args`].
    /// See [`OptionTable::parse_tokens`].
    pub fn parse<I, S>(&self, args: I) -> Result<Parsed<'_>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        self.parse_tokens(tokens.as_slice())
    }

    /// The synopsis of all declared options: each option's synopsis line, in declaration order.
    ///
    /// ### Example
    /// ```
    /// # use nanoargs_builder as nanoargs;
    /// use nanoargs::{CliOption, OptionTable};
    ///
    /// let table = OptionTable::new(vec![
    ///     CliOption::flag("rev", "if set, activates reverse order of processing"),
    ///     CliOption::with_default("d", ".", "<directory>", "sets current directory for processing"),
    /// ]);
    ///
    /// assert_eq!(
    ///     table.synopsis(),
    ///     "\t-rev - if set, activates reverse order of processing\n\t-d <directory> - sets current directory for processing (default is '.')\n"
    /// );
    /// ```
    pub fn synopsis(&self) -> String {
        self.options.iter().map(CliOption::synopsis).collect()
    }
}

impl FromIterator<CliOption> for OptionTable {
    fn from_iter<I: IntoIterator<Item = CliOption>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The command line parser builder.
///
/// ### Example
/// ```
/// # use nanoargs_builder as nanoargs;
/// use nanoargs::{CliOption, CommandLineParser};
///
/// let parser = CommandLineParser::new("program")
///     .add(CliOption::flag("rev", "if set, activates reverse order of processing"))
///     .build();
///
/// let parsed = parser.parse_tokens(vec!["-rev", "input"].as_slice()).unwrap();
///
/// assert_eq!(parsed.is_on("rev"), Ok(true));
/// assert_eq!(parsed.positionals(), &["input"]);
/// ```
pub struct CommandLineParser {
    program: String,
    about: Option<String>,
    options: Vec<CliOption>,
    help: Option<String>,
}

/// The description of the help flag, when enabled via [`CommandLineParser::help`].
pub const HELP_MESSAGE: &str = "displays command line format and list of options";

impl CommandLineParser {
    /// Create a command line parser.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            options: Vec::default(),
            help: None,
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// An about message documents the command line parser in full sentence/paragraph format.
    /// It is wrapped to the terminal width when displayed (ex: it is not recommended to use line breaks `'\n'`).
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an option to the command line parser.
    ///
    /// The order of options determines their order in the synopsis.
    pub fn add(mut self, option: CliOption) -> Self {
        self.options.push(option);
        self
    }

    /// Declare a help flag, under `key`.
    /// If repeated, only the final help key will apply.
    ///
    /// When the help flag is specified, the parser displays the usage message instead of producing a result.
    ///
    /// ### Example
    /// ```
    /// # use nanoargs_builder as nanoargs;
    /// use nanoargs::{CliOption, CommandLineParser};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(CliOption::required("p", "<password>", "sets the password for encryption"))
    ///     .help("h")
    ///     .build();
    ///
    /// // The help flag takes precedence over the missing required option.
    /// assert_eq!(parser.parse_tokens(vec!["-h"].as_slice()).unwrap_err(), 0);
    /// ```
    pub fn help(mut self, key: impl Into<String>) -> Self {
        self.help.replace(key.into());
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, ConfigError> {
        let CommandLineParser {
            program,
            about,
            mut options,
            help,
        } = self;

        if let Some(help) = &help {
            options.push(CliOption::flag(help.clone(), HELP_MESSAGE));
        }

        let mut keys = HashSet::new();

        for option in &options {
            if !keys.insert(option.key()) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the option '-{}'.",
                    option.key()
                )));
            }
        }

        Ok(GeneralParser::new(
            OptionTable::new(options),
            help,
            Printer::terminal(program, about),
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option key).
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option key).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build the command line parser, capturing its output rather than printing it.
    ///
    /// ### Example
    /// ```
    /// # use nanoargs_builder as nanoargs;
    /// use nanoargs::{CliOption, CommandLineParser};
    ///
    /// let (parser, output) = CommandLineParser::new("program")
    ///     .add(CliOption::required("p", "<password>", "sets the password for encryption"))
    ///     .build_capturing()
    ///     .unwrap();
    ///
    /// assert_eq!(parser.parse_tokens(vec!["-Z"].as_slice()).unwrap_err(), 1);
    /// drop(parser);
    ///
    /// let (message, error, _) = output.consume();
    /// assert!(message.unwrap().contains("(required option)"));
    /// assert_eq!(
    ///     error.unwrap(),
    ///     "Problem detected when parsing the option -Z - Unrecognized option -Z (code 22)"
    /// );
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_capturing(self) -> Result<(GeneralParser, CapturedOutput), ConfigError> {
        let (sender, receiver) = channel_interface();
        let parser = self.build_with_interface(Box::new(sender))?;
        Ok((parser, receiver))
    }
}
