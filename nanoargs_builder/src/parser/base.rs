use thiserror::Error;

use crate::api::{CliOption, OptionState};
use crate::model::Initial;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid command line parser configuration.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The reasons a parse may fail.
///
/// Each failure is raised at the first offending token; no partial results are returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A dash-token names no declared option.
    /// Carries the literal token, including its dash.
    #[error("Unrecognized option {token}")]
    UnrecognizedOption {
        /// The offending token.
        token: String,
    },

    /// The same option was specified twice.
    #[error("Duplicated option -{key}")]
    DuplicateOption {
        /// The repeated option key.
        key: String,
    },

    /// A value option was the final token, leaving nothing to consume as its value.
    #[error("The value of option -{key} (next argument) is missing")]
    MissingOptionValue {
        /// The value option key.
        key: String,
    },

    /// A required option was never specified.
    #[error("Required option -{key} is missing")]
    MissingRequiredOption {
        /// The required option key.
        key: String,
    },

    /// A flag query was made against a value option.
    #[error("Option -{key} is not a flag option")]
    NotAFlagOption {
        /// The value option key.
        key: String,
    },
}

impl ParseError {
    /// The numeric code of this error kind.
    pub fn code(&self) -> i32 {
        match self {
            ParseError::UnrecognizedOption { .. } => 22,
            ParseError::DuplicateOption { .. } => 33,
            ParseError::MissingOptionValue { .. } => 44,
            ParseError::MissingRequiredOption { .. } => 55,
            ParseError::NotAFlagOption { .. } => 66,
        }
    }

    /// The key of the declared option this error refers to.
    /// `None` for an unrecognized option, since no declaration matches it.
    pub fn key(&self) -> Option<&str> {
        match self {
            ParseError::UnrecognizedOption { .. } => None,
            ParseError::DuplicateOption { key }
            | ParseError::MissingOptionValue { key }
            | ParseError::MissingRequiredOption { key }
            | ParseError::NotAFlagOption { key } => Some(key.as_str()),
        }
    }

    /// Describe this error as a problem report, including its code.
    ///
    /// ### Example
    /// ```
    /// # use nanoargs_builder as nanoargs;
    /// use nanoargs::ParseError;
    ///
    /// let error = ParseError::MissingRequiredOption { key: "p".to_string() };
    /// assert_eq!(
    ///     error.problem().to_string(),
    ///     "Problem detected when parsing the option -p - Required option -p is missing (code 55)"
    /// );
    /// ```
    pub fn problem(&self) -> Problem<'_> {
        Problem(self)
    }
}

/// The problem report of a [`ParseError`].
/// Built via [`ParseError::problem`].
#[derive(Debug)]
pub struct Problem<'e>(&'e ParseError);

impl<'e> std::fmt::Display for Problem<'e> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            ParseError::UnrecognizedOption { token } => write!(
                f,
                "Problem detected when parsing the option {token} - {e} (code {c})",
                e = self.0,
                c = self.0.code(),
            ),
            _ => write!(
                f,
                "Problem detected when parsing the option -{key} - {e} (code {c})",
                key = self.0.key().unwrap_or_default(),
                e = self.0,
                c = self.0.code(),
            ),
        }
    }
}

/// The outcome of a successful scan: one state per declared option (in declaration order), and the positional tokens.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Scan {
    pub(crate) states: Vec<OptionState>,
    pub(crate) positionals: Vec<String>,
}

/// The single-pass token scanner over a set of option declarations.
pub(crate) struct Parser<'t> {
    options: &'t [CliOption],
}

impl<'t> std::fmt::Debug for Parser<'t> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'t> Parser<'t> {
    pub(crate) fn new(options: &'t [CliOption]) -> Self {
        Self { options }
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.options.iter().position(|option| option.key() == key)
    }

    /// Scan the tokens and check all required options were supplied.
    ///
    /// On error, also reports the index of the offending token.
    /// Errors detected after the scan (missing required options) report `tokens.len()`.
    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<Scan, (usize, ParseError)> {
        let scan = self.scan(tokens)?;
        self.require(&scan).map_err(|error| (tokens.len(), error))?;
        Ok(scan)
    }

    /// Scan the tokens left to right, separating the option tokens (and their values) from the positionals.
    pub(crate) fn scan(&self, tokens: &[&str]) -> Result<Scan, (usize, ParseError)> {
        let mut states = vec![OptionState::default(); self.options.len()];
        let mut positionals = Vec::default();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = tokens[cursor];

            let key = match token.strip_prefix('-') {
                Some(key) => key,
                None => {
                    positionals.push(token.to_string());
                    cursor += 1;
                    continue;
                }
            };

            let index = self.find(key).ok_or_else(|| {
                (
                    cursor,
                    ParseError::UnrecognizedOption {
                        token: token.to_string(),
                    },
                )
            })?;
            let option = &self.options[index];

            if states[index].processed() {
                return Err((
                    cursor,
                    ParseError::DuplicateOption {
                        key: option.key().to_string(),
                    },
                ));
            }

            match option.initial() {
                Initial::Flag => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Matched flag '-{key}' at token {cursor}.");
                    }

                    states[index].switch_on();
                    cursor += 1;
                }
                Initial::Required | Initial::Default(_) => match tokens.get(cursor + 1) {
                    Some(value) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Matched option '-{key}' at token {cursor}, with value '{value}'.");
                        }

                        states[index].supply(value);
                        cursor += 2;
                    }
                    None => {
                        return Err((
                            cursor,
                            ParseError::MissingOptionValue {
                                key: option.key().to_string(),
                            },
                        ));
                    }
                },
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Scanned {n} tokens, leaving {p} positionals.",
                n = tokens.len(),
                p = positionals.len()
            );
        }

        Ok(Scan {
            states,
            positionals,
        })
    }

    /// Find the first declared required option which the scan did not supply.
    pub(crate) fn require(&self, scan: &Scan) -> Result<(), ParseError> {
        match self
            .options
            .iter()
            .zip(scan.states.iter())
            .find(|(option, state)| option.initial().is_required() && !state.processed())
        {
            Some((option, _)) => Err(ParseError::MissingRequiredOption {
                key: option.key().to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use rstest::rstest;

    fn options() -> Vec<CliOption> {
        vec![
            CliOption::required("p", "<password>", "sets the password for encryption"),
            CliOption::flag("rev", "if set, activates reverse order of processing"),
            CliOption::with_default("d", ".", "<directory>", "sets current directory for processing"),
        ]
    }

    #[test]
    fn parser_empty() {
        // Setup
        let parser = Parser::new(&[]);

        // Execute
        let scan = parser.consume(&[]).unwrap();

        // Verify
        assert_eq!(
            scan,
            Scan {
                states: vec![],
                positionals: vec![],
            }
        );
    }

    #[test]
    fn parser_positionals_only() {
        let options = vec![CliOption::flag("v", "verbose")];
        let parser = Parser::new(&options);

        for _ in 0..100 {
            // Setup
            let length = thread_rng().gen_range(0..10);
            let tokens: Vec<String> = (0..length)
                .map(|_| {
                    let size = thread_rng().gen_range(1..8);
                    thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(size)
                        .map(char::from)
                        .collect()
                })
                .collect();
            let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

            // Execute
            let scan = parser.consume(tokens.as_slice()).unwrap();

            // Verify
            assert_eq!(scan.positionals, tokens);
            assert!(scan.states.iter().all(|state| !state.processed()));
        }
    }

    #[rstest]
    #[case(vec!["-p", "x"], vec![], "x", false, None)]
    #[case(vec!["a", "-p", "x", "b"], vec!["a", "b"], "x", false, None)]
    #[case(vec!["-rev", "-p", "x"], vec![], "x", true, None)]
    #[case(vec!["-p", "-rev"], vec![], "-rev", false, None)]
    #[case(vec!["-p", "x", "-d", "y"], vec![], "x", false, Some("y"))]
    #[case(vec!["-d", "-p", "-p", "x"], vec![], "x", false, Some("-p"))]
    #[case(vec!["-p", ""], vec![], "", false, None)]
    #[case(vec!["c", "-p", "x", "-rev", "i", "o", "-d", "another directory"], vec!["c", "i", "o"], "x", true, Some("another directory"))]
    fn parser_consume(
        #[case] tokens: Vec<&str>,
        #[case] expected_positionals: Vec<&str>,
        #[case] expected_p: &str,
        #[case] expected_rev: bool,
        #[case] expected_d: Option<&str>,
    ) {
        // Setup
        let options = options();
        let parser = Parser::new(&options);

        // Execute
        let scan = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(scan.positionals, expected_positionals);
        assert_eq!(scan.states[0].supplied(), Some(expected_p));
        assert_eq!(scan.states[1].processed(), expected_rev);
        assert_eq!(scan.states[1].supplied(), None);
        assert_eq!(scan.states[2].supplied(), expected_d);
        assert_eq!(scan.states[2].processed(), expected_d.is_some());
    }

    #[rstest]
    #[case(vec!["-Z"], 0, ParseError::UnrecognizedOption { token: "-Z".to_string() })]
    #[case(vec!["-"], 0, ParseError::UnrecognizedOption { token: "-".to_string() })]
    #[case(vec!["--p", "x"], 0, ParseError::UnrecognizedOption { token: "--p".to_string() })]
    #[case(vec!["-P", "x"], 0, ParseError::UnrecognizedOption { token: "-P".to_string() })]
    #[case(vec!["-p", "x", "-Z"], 2, ParseError::UnrecognizedOption { token: "-Z".to_string() })]
    #[case(vec!["-p", "x", "-p", "y"], 2, ParseError::DuplicateOption { key: "p".to_string() })]
    #[case(vec!["-rev", "-rev"], 1, ParseError::DuplicateOption { key: "rev".to_string() })]
    #[case(vec!["-p", "x", "-d"], 2, ParseError::MissingOptionValue { key: "d".to_string() })]
    #[case(vec!["-p"], 0, ParseError::MissingOptionValue { key: "p".to_string() })]
    #[case(vec![], 0, ParseError::MissingRequiredOption { key: "p".to_string() })]
    #[case(vec!["-rev", "a"], 2, ParseError::MissingRequiredOption { key: "p".to_string() })]
    // Scan errors short-circuit before the required option check.
    #[case(vec!["-rev", "-Z"], 1, ParseError::UnrecognizedOption { token: "-Z".to_string() })]
    #[case(vec!["-d"], 0, ParseError::MissingOptionValue { key: "d".to_string() })]
    fn parser_consume_error(
        #[case] tokens: Vec<&str>,
        #[case] expected_offset: usize,
        #[case] expected: ParseError,
    ) {
        // Setup
        let options = options();
        let parser = Parser::new(&options);

        // Execute
        let (offset, error) = parser.consume(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(offset, expected_offset);
        assert_eq!(error, expected);
    }

    #[test]
    fn parser_scan_then_require() {
        // Setup
        let options = options();
        let parser = Parser::new(&options);

        // Execute
        let scan = parser.scan(vec!["-rev", "a"].as_slice()).unwrap();
        let error = parser.require(&scan).unwrap_err();

        // Verify
        assert_eq!(scan.positionals, vec!["a"]);
        assert!(scan.states[1].processed());
        assert_eq!(
            error,
            ParseError::MissingRequiredOption {
                key: "p".to_string()
            }
        );
    }

    #[test]
    fn parser_empty_key() {
        // Setup
        let options = vec![CliOption::flag("", "the bare dash")];
        let parser = Parser::new(&options);

        // Execute
        let scan = parser.consume(vec!["a", "-", "b"].as_slice()).unwrap();

        // Verify
        assert_eq!(scan.positionals, vec!["a", "b"]);
        assert!(scan.states[0].processed());
    }

    #[test]
    fn parser_first_match() {
        // Setup
        let options = vec![
            CliOption::flag("k", "first"),
            CliOption::required("k", "<K>", "second"),
        ];
        let parser = Parser::new(&options);

        // Execute
        let (offset, error) = parser.consume(vec!["-k"].as_slice()).unwrap_err();

        // Verify
        // The flag wins the lookup, leaving the required shadow un-supplied.
        assert_eq!(offset, 1);
        assert_eq!(
            error,
            ParseError::MissingRequiredOption {
                key: "k".to_string()
            }
        );
    }

    #[test]
    fn parser_required_declaration_order() {
        // Setup
        let options = vec![
            CliOption::required("a", "<A>", "a"),
            CliOption::required("b", "<B>", "b"),
        ];
        let parser = Parser::new(&options);

        // Execute
        let (_, error) = parser.consume(&[]).unwrap_err();

        // Verify
        assert_eq!(
            error,
            ParseError::MissingRequiredOption {
                key: "a".to_string()
            }
        );
    }

    #[rstest]
    #[case(ParseError::UnrecognizedOption { token: "-Z".to_string() }, 22, None, "Unrecognized option -Z")]
    #[case(ParseError::DuplicateOption { key: "p".to_string() }, 33, Some("p"), "Duplicated option -p")]
    #[case(ParseError::MissingOptionValue { key: "d".to_string() }, 44, Some("d"), "The value of option -d (next argument) is missing")]
    #[case(ParseError::MissingRequiredOption { key: "p".to_string() }, 55, Some("p"), "Required option -p is missing")]
    #[case(ParseError::NotAFlagOption { key: "d".to_string() }, 66, Some("d"), "Option -d is not a flag option")]
    fn parse_error(
        #[case] error: ParseError,
        #[case] expected_code: i32,
        #[case] expected_key: Option<&str>,
        #[case] expected_message: &str,
    ) {
        assert_eq!(error.code(), expected_code);
        assert_eq!(error.key(), expected_key);
        assert_eq!(error.to_string(), expected_message);
        assert_eq!(
            error.problem().to_string(),
            format!(
                "Problem detected when parsing the option {o} - {expected_message} (code {expected_code})",
                o = match expected_key {
                    Some(key) => format!("-{key}"),
                    None => "-Z".to_string(),
                }
            )
        );
    }

    #[test]
    fn config_error() {
        let error = ConfigError("Cannot duplicate the option '-p'.".to_string());
        assert_eq!(
            error.to_string(),
            "Config error: Cannot duplicate the option '-p'."
        );
    }
}
