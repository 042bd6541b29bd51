mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError, Problem};
pub(crate) use base::{Parser, Scan};
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub use middleware::GeneralParser;
pub(crate) use printer::{synopsis_line, Printer};

#[cfg(any(test, feature = "unit_test"))]
pub(crate) use interface::util;

/// Locates a parse error within the input tokens.
///
/// Displays as the tokens joined by spaces, with a caret under the offending token.
/// Errors detected after all tokens were scanned point one past the final token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[impl AsRef<str>]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    /// The index of the offending token (equal to the token count when the error concerns the end of input).
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Each preceding token contributes its own width plus a separating space.
        let indent: usize = self
            .tokens
            .iter()
            .take(self.offset)
            .map(|t| t.chars().count() + 1)
            .sum();
        writeln!(f, "{}", self.tokens.join(" "))?;
        write!(f, "{:indent$}^", "")
    }
}
