//! `nanoargs` is a minimal command line parser for Rust.
//!
//! It is built around a single, caller-declared table of options.
//! From that one table, `nanoargs` separates the recognized options (with their values) from the positional arguments, validates the options, and generates a usage synopsis.
//! `nanoargs` attempts to prioritize the following design concerns:
//! * *One declaration, two uses*:
//! The same option declarations drive both parsing and the help text, so the two never drift apart.
//! * *Small surface*:
//! Options are `-key` or `-key value`; everything else is positional.
//! There are no long options, combined short flags, sub-commands, or type conversions.
//! * *Declarations are not results*:
//! Declaring an option never mutates it.
//! Each parse returns its own [`Parsed`] result, so an [`OptionTable`] may be parsed any number of times.
//!
//! # Usage
//! via [`CommandLineParser`] (reports errors and usage on the console):
//! ```no_run
#![doc = include_str!("../demos/demo.rs")]
//! ```
//! or equivalently via [`OptionTable`] directly:
//! ```no_run
#![doc = include_str!("../demos/demo_table.rs")]
//! ```
//!
//! ```console
//! $ demo -h
//! usage: demo <options> <positional arguments>
//! 	Options and positional arguments may be intermixed.
//! Demonstrates the nanoargs parser.  Options and positional arguments may be intermixed; the positional
//! arguments are left for the application to process.
//! options:
//! 	-p <password> - sets the password for encryption (required option)
//! 	-rev - if set, activates reverse order of processing
//! 	-d <directory> - sets current directory for processing (default is '.')
//! 	-h - displays command line format and list of options
//!
//! $ demo command -p abracadabra -rev input output -d "another directory"
//! Positional arguments:
//!   command
//!   input
//!   output
//! Password: abracadabra
//! Reverse order: true
//! Directory: another directory
//!
//! $ demo -rev input
//! Problem detected when parsing the option -p - Required option -p is missing (code 55)
//! -rev input
//!            ^
//! usage: demo <options> <positional arguments>
//! <truncated>
//! ```
//!
//! # Option Declarations
//! Each [`CliOption`] has a key (without its leading dash), a description, and an [`Initial`] which determines how its value comes about:
//! * [`Initial::Flag`]: a switch that consumes no value (ex: `-rev`).
//! Query it with [`Parsed::is_on`].
//! * [`Initial::Required`]: a value option that must be specified (ex: `-p <password>`).
//! * [`Initial::Default`]: a value option that falls back to its default (ex: `-d <directory>`, defaulting to `.`).
//!
//! Read value options with [`Parsed::value`], which resolves to the specified value or else the default.
//!
//! # Cli Semantics
//! `nanoargs` scans the Cli tokens once, left to right.
//!
//! * A token starting with `-` names an option: the single leading dash is stripped to get the key.
//! Keys match exactly (case-sensitive), against the first declaration with that key.
//! For example, `--p` looks up the key `-p`, and `-` looks up the empty key.
//! * A flag option consumes only its own token.
//! * A value option consumes the next token as its value, whatever it looks like.
//! For example, `-p -rev` gives `-p` the value `-rev`.
//! * Every other token is a positional argument.
//! Positional arguments keep their relative order, and may be intermixed with options.
//!
//! Parsing stops at the first [`ParseError`]:
//!
//! ```console
//! Kind                   | Code | Trigger
//! --------------------------------------------------------------------------------
//! UnrecognizedOption     | 22   | a dash-token names no declared option
//! DuplicateOption        | 33   | an option is specified twice
//! MissingOptionValue     | 44   | a value option is the final token
//! MissingRequiredOption  | 55   | after all tokens, a required option is still missing
//! NotAFlagOption         | 66   | `Parsed::is_on` is used on a value option
//! ```
//!
//! The required option check only happens once every token has been scanned successfully.
//!
//! # Synopsis
//! [`OptionTable::synopsis`] lists each option on its own line, in declaration order:
//! ```console
//! 	-rev - if set, activates reverse order of processing
//! 	-p <password> - sets the password for encryption (required option)
//! 	-d <directory> - sets current directory for processing (default is '.')
//! ```
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while parsing.
pub use nanoargs_builder::*;
