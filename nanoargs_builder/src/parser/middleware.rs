use std::env;

use crate::api::{OptionTable, Parsed};
use crate::parser::base::Parser;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](./struct.CommandLineParser.html#method.build).
pub struct GeneralParser {
    table: OptionTable,
    help: Option<String>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl GeneralParser {
    pub(crate) fn new(
        table: OptionTable,
        help: Option<String>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            table,
            help,
            printer,
            user_interface,
        }
    }

    /// The option declarations of this parser, including the help flag (if any).
    pub fn table(&self) -> &OptionTable {
        &self.table
    }

    /// The program name shown in the usage message.
    pub fn program(&self) -> &str {
        self.printer.program()
    }

    /// The synopsis of all declared options.
    pub fn synopsis(&self) -> String {
        self.table.synopsis()
    }

    /// Display the usage message.
    pub fn print_usage(&self) {
        self.printer
            .print_usage(&self.table.synopsis(), &*self.user_interface);
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Parsing happens in two phases:
    /// 1. The tokens are scanned, separating options (and their values) from positional arguments.
    /// All tokens must scan successfully in order to proceed to the next phase.
    /// 2. The required options are checked.
    ///
    /// If the help flag is switched on after phase #1, the parser will display the usage message and return with `Err(0)`.
    /// This skips the phase #2 check.
    ///
    /// If at any point the parser encounters an error (ex: unrecognized option, duplicate option, etc), it will display the error, its context, and the usage message, and return with `Err(1)`.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Parsed<'_>, i32> {
        let parser = Parser::new(self.table.options());

        let outcome = parser.scan(tokens).and_then(|scan| {
            let help_on = self
                .help
                .as_ref()
                .and_then(|help| self.table.position(help))
                .map_or(false, |index| scan.states[index].processed());

            if help_on {
                return Ok(None);
            }

            parser
                .require(&scan)
                .map(|()| Some(scan))
                .map_err(|error| (tokens.len(), error))
        });

        match outcome {
            Ok(Some(scan)) => Ok(Parsed::new(
                self.table.options(),
                scan.states,
                scan.positionals,
            )),
            Ok(None) => {
                self.print_usage();
                Err(0)
            }
            Err((offset, parse_error)) => {
                self.user_interface.print_error(parse_error);
                self.user_interface
                    .print_error_context(ErrorContext::new(offset, tokens));
                self.print_usage();
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except it exits with the error code (via `std::process::exit`) instead of returning it.
    pub fn parse(&self) -> Parsed<'_> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(parsed) => parsed,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.printer.program())
            .field("table", &self.table)
            .field("help", &self.help)
            .finish()
    }
}
