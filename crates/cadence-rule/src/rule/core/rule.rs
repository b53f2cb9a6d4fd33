//! Typed recurrence rules.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::CalendarDate;
use crate::rule::parse::{SyntaxError, parse_rule};

/// Accepted range of the `d <n>` interval.
pub const MIN_INTERVAL_DAYS: u32 = 1;
pub const MAX_INTERVAL_DAYS: u32 = 400;

/// ISO weekday numbers accepted by `w`.
pub const MIN_WEEKDAY: u32 = 1;
pub const MAX_WEEKDAY: u32 = 7;

/// Month numbers accepted by `m`.
pub const MIN_MONTH: u32 = 1;
pub const MAX_MONTH: u32 = 12;

/// Accepted range of `m` day-of-month entries (0 excluded).
pub const MIN_MONTH_DAY: i32 = -2;
pub const MAX_MONTH_DAY: i32 = 31;

/// Day-of-month entry meaning the last day of the month.
pub const LAST_DAY: i32 = -1;
/// Day-of-month entry meaning the second-to-last day of the month.
pub const SECOND_TO_LAST_DAY: i32 = -2;

/// A parsed, validated repeat rule.
///
/// Sets are ordered and de-duplicated; duplicates in the source expression
/// are accepted and collapse here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// `d <n>`: every `n` days, `n` in 1..=400.
    EveryNDays(u32),
    /// `y`: once a year on the same month and day.
    Yearly,
    /// `w <list>`: on the listed ISO weekdays (Monday = 1).
    WeeklyOn(BTreeSet<u32>),
    /// `m <days>[ <months>]`: on the listed days of the listed months.
    ///
    /// An empty `months` set means every month.
    MonthlyOn {
        days: BTreeSet<i32>,
        months: BTreeSet<u32>,
    },
}

impl RecurrenceRule {
    /// The one-letter tag the expression starts with.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::EveryNDays(_) => "d",
            Self::Yearly => "y",
            Self::WeeklyOn(_) => "w",
            Self::MonthlyOn { .. } => "m",
        }
    }

    /// Whether `date` is an acceptable occurrence for a weekly or monthly
    /// rule, ignoring its position relative to "now".
    ///
    /// Interval and yearly rules are stepped rather than matched, so they
    /// never match a bare date.
    #[must_use]
    pub fn matches(&self, date: CalendarDate) -> bool {
        match self {
            Self::EveryNDays(_) | Self::Yearly => false,
            Self::WeeklyOn(weekdays) => weekdays.contains(&date.iso_weekday()),
            Self::MonthlyOn { days, months } => {
                (months.is_empty() || months.contains(&date.month()))
                    && days.iter().any(|&entry| matches_month_day(entry, date))
            }
        }
    }
}

/// Month length is taken from the candidate's own month every time.
fn matches_month_day(entry: i32, date: CalendarDate) -> bool {
    let day = date.day();
    let last = date.days_in_month();
    match entry {
        LAST_DAY => day == last,
        SECOND_TO_LAST_DAY => day + 1 == last,
        _ => u32::try_from(entry).is_ok_and(|entry| entry == day),
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())?;
        match self {
            Self::EveryNDays(n) => write!(f, " {n}"),
            Self::Yearly => Ok(()),
            Self::WeeklyOn(weekdays) => write!(f, " {}", join(weekdays)),
            Self::MonthlyOn { days, months } => {
                write!(f, " {}", join(days))?;
                if !months.is_empty() {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

fn join<T: fmt::Display>(values: &BTreeSet<T>) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
