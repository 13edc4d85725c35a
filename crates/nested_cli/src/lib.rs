#![deny(unused_imports)]
//! Command Line Argument Parser
//!
//! It's tiny and it renders errors with a caret under the wrong argument.

mod dist;
mod error;
mod parser;
mod span;

pub use dist::{get_closest_string, substr_edit_distance};
pub use error::{Error, ErrorKind};
pub use parser::{ArgCount, ArgParser, ArgType, ParsedArgs};
pub use span::{RenderedSpan, underline_span};
