//! Repeat rule expression parser.

mod error;
mod parser;
mod values;

pub use error::{ParseResult, SyntaxError, SyntaxErrorKind};
pub use parser::parse_rule;
