//! Recurrence engine: parses repeat rule expressions and computes the next
//! occurrence of a recurring task.
//!
//! ```text
//! d <n>               every n days (1..=400)
//! y                   every year on the same day
//! w <list>            on ISO weekdays (1 = Monday .. 7 = Sunday)
//! m <days>[ <months>] on days of month (-1 last, -2 second to last),
//!                     optionally only in the listed months
//! ```

pub mod error;
pub mod rule;

pub use error::{RuleError, RuleResult};
pub use rule::advance::{Scheduler, next_date};
pub use rule::core::{CalendarDate, DateParseError, RecurrenceRule};
pub use rule::parse::{SyntaxError, SyntaxErrorKind, parse_rule};
