#![deny(unused_imports)]
//! A small command line parser. It knows nothing about integers: positional
//! arguments are handed back as strings.

mod dist;
mod error;
mod parser;
mod span;

pub use dist::{edit_distance, get_closest_string};
pub use error::{Error, ErrorKind};
pub use parser::{ArgCount, ArgParser, ArgType, ParsedArgs};
pub use span::{RenderedSpan, underline_span};
