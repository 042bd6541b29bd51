use crate::parser::base::ParseError;
use crate::parser::ErrorContext;

/// Split a paragraph into lines no wider than `width`, hyphenating any word that cannot fit on a line by itself.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.len() + word.len() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    // width must be at least 2 (so we can hyphenate)
    assert!(width >= 2, "internal error - cannot hyphenate into width {width}");
    let increment = width - 1;
    let mut left = 0;
    let mut right = increment;

    // Only ascii words are split; splitting elsewhere could land inside a char.
    while word.is_ascii() && right + 1 < word.len() {
        lines.push(format!("{}-", &word[left..right]));
        left += increment;
        right += increment;
    }

    current.push_str(&word[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{}", error.problem());
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub(crate) mod util {
    use crate::parser::{ErrorContext, ParseError, UserInterface};
    use std::sync::mpsc;

    #[cfg(test)]
    pub(crate) use in_memory::InMemoryInterface;

    #[cfg(test)]
    mod in_memory {
        use super::*;
        use std::cell::RefCell;

        pub(crate) struct InMemoryInterface {
            message: RefCell<Option<Vec<String>>>,
            error: RefCell<Option<String>>,
            error_context: RefCell<Option<ErrorContext>>,
        }

        impl Default for InMemoryInterface {
            fn default() -> Self {
                Self {
                    message: RefCell::new(None),
                    error: RefCell::new(None),
                    error_context: RefCell::new(None),
                }
            }
        }

        impl UserInterface for InMemoryInterface {
            fn print(&self, message: String) {
                // Allows for print() to be called many times, concatenating the messages.
                let mut output = self.message.borrow_mut();

                match output.as_mut() {
                    Some(messages) => messages.push(message),
                    None => {
                        output.replace(vec![message]);
                    }
                }
            }

            fn print_error(&self, error: ParseError) {
                // Assumes print_error() is only ever called once.
                self.error.borrow_mut().replace(error.problem().to_string());
            }

            fn print_error_context(&self, error_context: ErrorContext) {
                // Assumes print_error_context() is only ever called once.
                self.error_context.borrow_mut().replace(error_context);
            }
        }

        impl InMemoryInterface {
            pub(crate) fn consume(self) -> (Option<String>, Option<String>, Option<ErrorContext>) {
                let InMemoryInterface {
                    message,
                    error,
                    error_context,
                } = self;

                (
                    message.take().map(|messages| messages.join("\n")),
                    error.take(),
                    error_context.take(),
                )
            }

            pub(crate) fn consume_message(self) -> String {
                let (message, error, error_context) = self.consume();
                assert_eq!(error, None);
                assert_eq!(error_context, None);
                message.unwrap()
            }
        }
    }

    pub(crate) fn channel_interface() -> (SenderInterface, CapturedOutput) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let (error_context_tx, error_context_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            error_tx,
            error_context_tx,
        };
        let receiver = CapturedOutput {
            message_rx,
            error_rx,
            error_context_rx,
        };
        (sender, receiver)
    }

    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
        error_context_tx: mpsc::Sender<Option<ErrorContext>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            // The receiver may have been dropped already, in which case there is nobody to notify.
            let _ = self.message_tx.send(None);
            let _ = self.error_tx.send(None);
            let _ = self.error_context_tx.send(None);
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, with the receiver concatenating the messages.
            let _ = self.message_tx.send(Some(message));
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once, with the receiver only taking the first.
            let _ = self.error_tx.send(Some(error.problem().to_string()));
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once, with the receiver only taking the first.
            let _ = self.error_context_tx.send(Some(error_context));
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// The output a [`GeneralParser`](../struct.GeneralParser.html) would have printed.
    /// Built via [`CommandLineParser::build_capturing`](../struct.CommandLineParser.html#method.build_capturing).
    pub struct CapturedOutput {
        message_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
        error_context_rx: mpsc::Receiver<Option<ErrorContext>>,
    }

    impl CapturedOutput {
        /// Collect the printed message, error, and error context.
        ///
        /// The parser must be dropped before consuming, otherwise this blocks.
        pub fn consume(self) -> (Option<String>, Option<String>, Option<ErrorContext>) {
            let mut messages = Vec::default();

            while let Ok(Some(message)) = self.message_rx.recv() {
                messages.push(message);
            }

            let message = if messages.is_empty() {
                None
            } else {
                Some(messages.join("\n"))
            };
            let error = self.error_rx.recv().ok().flatten();
            let error_context = self.error_context_rx.recv().ok().flatten();

            (message, error, error_context)
        }

        /// Collect the printed message, asserting there was no error.
        pub fn consume_message(self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap_or_default()
        }
    }
}
