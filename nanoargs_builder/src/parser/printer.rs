use terminal_size::{terminal_size, Width};

use crate::model::Initial;
use crate::parser::interface::{chunk, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Render the synopsis line of a single option.
pub(crate) fn synopsis_line(
    key: &str,
    initial: &Initial,
    meaning: Option<&str>,
    description: &str,
) -> String {
    match initial {
        Initial::Flag => format!("\t-{key} - {description}\n"),
        Initial::Required => format!(
            "\t-{key} {m} - {description} (required option)\n",
            m = meaning.unwrap_or_default()
        ),
        Initial::Default(default) => format!(
            "\t-{key} {m} - {description} (default is '{default}')\n",
            m = meaning.unwrap_or_default()
        ),
    }
}

pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    terminal_width: Option<usize>,
}

// Used when the terminal width cannot be determined.
const DEFAULT_WIDTH: usize = 80;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_WIDTH: usize = 17;
// We'll target 95% of the total width, to ensure the printer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", None, None)
    }

    pub(crate) fn terminal(program: impl Into<String>, about: Option<String>) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, terminal_width)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            terminal_width,
        }
    }

    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    fn width(&self) -> usize {
        match self.terminal_width {
            Some(total) => {
                let target = (total as f64 * TARGET_TOTAL_FACTOR) as usize;
                let width = std::cmp::max(target, MINIMUM_WIDTH);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminal width {total}.  Selecting width: {width}.");
                }
                width
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminal width unknown.  Selecting width: {DEFAULT_WIDTH}.");
                }
                DEFAULT_WIDTH
            }
        }
    }

    pub(crate) fn print_usage(
        &self,
        synopsis: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print(format!(
            "usage: {program} <options> <positional arguments>",
            program = self.program
        ));
        user_interface.print("\tOptions and positional arguments may be intermixed.".to_string());

        if let Some(about) = &self.about {
            for line in chunk(about, self.width()) {
                user_interface.print(line);
            }
        }

        if !synopsis.is_empty() {
            user_interface.print("options:".to_string());
            user_interface.print(synopsis.trim_end_matches('\n').to_string());
        }
    }
}
