//! Core value types of the recurrence engine.

mod date;
mod rule;

pub use date::{CalendarDate, DateParseError};
pub use rule::*;
