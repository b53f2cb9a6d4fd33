use cadence_core::constants::DEFAULT_MAX_SEARCH_DAYS;

use crate::error::{RuleError, RuleResult};
use crate::rule::core::{CalendarDate, RecurrenceRule};
use crate::rule::parse::parse_rule;

/// Computes next occurrences of repeat rules.
///
/// Holds only the forward-search bound, so one value can be shared freely
/// between request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    max_search_days: u32,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SEARCH_DAYS)
    }
}

impl Scheduler {
    /// Creates a scheduler whose weekly and monthly searches examine at most
    /// `max_search_days` candidate days.
    #[must_use]
    pub const fn new(max_search_days: u32) -> Self {
        Self { max_search_days }
    }

    #[must_use]
    pub const fn max_search_days(self) -> u32 {
        self.max_search_days
    }

    /// ## Summary
    /// Returns the first occurrence of `rule` strictly after `now`, stepping
    /// forward from `last`.
    ///
    /// At least one step is always taken from `last`, even when `last` is
    /// already after `now`, so completing a task twice from the same stored
    /// date never yields that date again.
    ///
    /// ## Errors
    /// `SearchExhausted` if a weekly or monthly rule has no match within the
    /// search bound, `OutOfRange` if the result would pass 9999-12-31.
    pub fn next(
        self,
        now: CalendarDate,
        last: CalendarDate,
        rule: &RecurrenceRule,
    ) -> RuleResult<CalendarDate> {
        match rule {
            RecurrenceRule::EveryNDays(interval) => every_n_days(now, last, *interval),
            RecurrenceRule::Yearly => yearly(now, last),
            RecurrenceRule::WeeklyOn(_) | RecurrenceRule::MonthlyOn { .. } => {
                self.search(now, last, |candidate| rule.matches(candidate))
            }
        }
    }

    /// ## Summary
    /// String-level entry point: parses `repeat` and the `date` base date,
    /// advances, and formats the result as `YYYYMMDD`.
    ///
    /// The rule is parsed first, so a request with both a bad rule and a bad
    /// date reports the rule.
    ///
    /// ## Errors
    /// `Syntax` for a malformed rule, `InvalidBaseDate` for a malformed
    /// `date`, otherwise as [`Scheduler::next`].
    #[tracing::instrument(level = "debug", skip(self, now), fields(now = %now))]
    pub fn next_date(self, now: CalendarDate, date: &str, repeat: &str) -> RuleResult<String> {
        let rule = parse_rule(repeat)?;
        let last = CalendarDate::parse(date).map_err(RuleError::InvalidBaseDate)?;

        let next = self.next(now, last, &rule)?;
        tracing::debug!(rule = %rule, next = %next, "Computed next occurrence");
        Ok(next.to_string())
    }

    /// Scans day by day for the first date accepted by `accepts`.
    ///
    /// A candidate must be after both `last` and `now`, so the scan starts on
    /// the day after the later of the two.
    fn search(
        self,
        now: CalendarDate,
        last: CalendarDate,
        accepts: impl Fn(CalendarDate) -> bool,
    ) -> RuleResult<CalendarDate> {
        let mut candidate = last.max(now);
        for _ in 0..self.max_search_days {
            candidate = candidate.succ().ok_or(RuleError::OutOfRange)?;
            if accepts(candidate) {
                return Ok(candidate);
            }
        }

        tracing::debug!(
            start = %last.max(now),
            limit = self.max_search_days,
            "Forward search exhausted"
        );
        Err(RuleError::SearchExhausted {
            limit: self.max_search_days,
        })
    }
}

/// `last + k * interval` for the smallest `k >= 1` landing after `now`.
fn every_n_days(now: CalendarDate, last: CalendarDate, interval: u32) -> RuleResult<CalendarDate> {
    let step = u64::from(interval);
    // Negative elapsed means `last` is already in the future: one step.
    let steps = u64::try_from(now.days_since(last)).map_or(1, |elapsed| elapsed / step + 1);
    tracing::trace!(interval, steps, "Stepping interval rule");

    steps
        .checked_mul(step)
        .and_then(|offset| last.add_days(offset))
        .ok_or(RuleError::OutOfRange)
}

fn yearly(now: CalendarDate, last: CalendarDate) -> RuleResult<CalendarDate> {
    let mut next = last.add_year().ok_or(RuleError::OutOfRange)?;
    while next <= now {
        next = next.add_year().ok_or(RuleError::OutOfRange)?;
    }
    Ok(next)
}

/// ## Summary
/// [`Scheduler::next_date`] with the default search bound.
///
/// ## Errors
/// See [`Scheduler::next_date`].
pub fn next_date(now: CalendarDate, date: &str, repeat: &str) -> RuleResult<String> {
    Scheduler::default().next_date(now, date, repeat)
}
