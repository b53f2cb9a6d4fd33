//! The seam between task handling and the recurrence engine.

use std::sync::Arc;

use cadence_rule::{CalendarDate, RuleResult, Scheduler};

/// Engine handle shared between request handlers.
pub type SharedEngine = Arc<dyn RecurrenceEngine + Send + Sync>;

/// Computes the next occurrence for a stored task.
///
/// Implemented by [`Scheduler`]; task handling only ever goes through this
/// trait so that callers can substitute their own engine.
pub trait RecurrenceEngine {
    /// ## Summary
    /// Returns the next `YYYYMMDD` date strictly after `now` for the task
    /// stored on `date` with rule `repeat`.
    ///
    /// ## Errors
    /// Returns the engine's `RuleError` for a malformed rule or base date.
    fn next_date(&self, now: CalendarDate, date: &str, repeat: &str) -> RuleResult<String>;
}

impl RecurrenceEngine for Scheduler {
    fn next_date(&self, now: CalendarDate, date: &str, repeat: &str) -> RuleResult<String> {
        Scheduler::next_date(*self, now, date, repeat)
    }
}
