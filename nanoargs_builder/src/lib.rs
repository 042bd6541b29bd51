//! Builder module for `nanoargs`.
//! See [documentation root](https://docs.rs/nanoargs/latest/nanoargs/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, ErrorContext, GeneralParser, ParseError, Problem};

#[cfg(feature = "unit_test")]
pub use parser::util::CapturedOutput;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
