use cadence_core::constants::TODAY_SENTINEL;
use cadence_core::error::CoreError;
use cadence_rule::CalendarDate;

use super::{ScheduledTask, TaskRequest};
use crate::engine::RecurrenceEngine;
use crate::error::ServiceResult;

/// ## Summary
/// Validates a task write and resolves the date to store.
///
/// - an empty or `today` date means `now`
/// - a past date becomes `now` for one-shot tasks and the next occurrence for
///   recurring ones
/// - a non-empty repeat rule is always checked by `engine`
///
/// ## Errors
/// `CoreError::ValidationError` for an empty title or a malformed date, the
/// engine's `RuleError` for a rule it rejects.
pub fn prepare_task<E>(
    request: TaskRequest,
    now: CalendarDate,
    engine: &E,
) -> ServiceResult<ScheduledTask>
where
    E: RecurrenceEngine + ?Sized,
{
    let title = request.title.trim();
    if title.is_empty() {
        return Err(CoreError::ValidationError("task title must not be empty".into()).into());
    }

    let repeat = request.repeat.trim();
    let requested = match request.date.trim() {
        "" | TODAY_SENTINEL => now,
        date => CalendarDate::parse(date)
            .map_err(|err| CoreError::ValidationError(err.to_string()))?,
    };

    let date = if repeat.is_empty() {
        tracing::debug!(%requested, "One-shot task");
        requested.max(now).to_string()
    } else {
        let next = engine.next_date(now, &requested.to_string(), repeat)?;
        if requested < now {
            tracing::debug!(%requested, %next, repeat, "Moved past recurring task forward");
            next
        } else {
            requested.to_string()
        }
    };

    Ok(ScheduledTask {
        title: title.to_string(),
        date,
        comment: request.comment,
        repeat: repeat.to_string(),
    })
}
