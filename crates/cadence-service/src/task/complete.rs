use cadence_rule::CalendarDate;

use super::ScheduledTask;
use crate::engine::RecurrenceEngine;
use crate::error::ServiceResult;

/// What the store should do with a task that was marked done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// One-shot task: remove it.
    Delete,
    /// Recurring task: store this `YYYYMMDD` date instead.
    Reschedule(String),
}

/// ## Summary
/// Decides the outcome of marking `task` done on `now`.
///
/// ## Errors
/// The engine's `RuleError` if the stored rule or date no longer parses.
pub fn complete_task<E>(
    task: &ScheduledTask,
    now: CalendarDate,
    engine: &E,
) -> ServiceResult<Completion>
where
    E: RecurrenceEngine + ?Sized,
{
    if !task.is_recurring() {
        tracing::debug!(title = %task.title, "Completed one-shot task");
        return Ok(Completion::Delete);
    }

    let next = engine.next_date(now, &task.date, &task.repeat)?;
    tracing::debug!(title = %task.title, from = %task.date, to = %next, "Rescheduled task");
    Ok(Completion::Reschedule(next))
}
