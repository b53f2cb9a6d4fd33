//! Date-only calendar values in the canonical `YYYYMMDD` form.

use std::fmt;
use std::str::FromStr;

use cadence_core::constants::DATE_FORMAT;
use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

/// Years representable by the 8-digit canonical form.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A string that is not an 8-digit Gregorian calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{input:?} is not a valid YYYYMMDD date")]
pub struct DateParseError {
    pub input: String,
}

/// A proleptic Gregorian date without time of day.
///
/// Always within years 0000..=9999 so that [`fmt::Display`] yields exactly
/// eight digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its components, `None` if it does not exist or is
    /// outside the representable range.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    /// Wraps a `chrono` date, `None` outside years 0000..=9999.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&date.year())
            .then_some(Self(date))
    }

    /// ## Summary
    /// Parses the canonical 8-digit `YYYYMMDD` form.
    ///
    /// Signs, separators and surrounding whitespace are rejected, as are
    /// dates that do not exist (`20230229`, `20241301`).
    ///
    /// ## Errors
    /// Returns `DateParseError` if the input is not a valid 8-digit date.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let invalid = || DateParseError {
            input: input.to_string(),
        };

        // chrono alone would accept a sign or a short year
        if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .ok()
            .and_then(Self::from_naive)
            .ok_or_else(invalid)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7.
    #[must_use]
    pub fn iso_weekday(self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    /// Number of days in this date's month, leap-year aware.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        u32::from(self.0.num_days_in_month())
    }

    /// The following day, `None` past 9999-12-31.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().and_then(Self::from_naive)
    }

    #[must_use]
    pub fn add_days(self, days: u64) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .and_then(Self::from_naive)
    }

    /// Same month and day one year later.
    ///
    /// 29 February rolls over to 1 March when the next year is not a leap year.
    #[must_use]
    pub fn add_year(self) -> Option<Self> {
        let year = self.year().checked_add(1)?;
        Self::from_ymd(year, self.month(), self.day()).or_else(|| Self::from_ymd(year, 3, 1))
    }

    /// Signed whole days from `earlier` to `self`.
    #[must_use]
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn parse_basic() {
        let d = date("20240131");
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 31);
        assert_eq!(d.to_string(), "20240131");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(CalendarDate::parse("2024013").is_err()); // Too short
        assert!(CalendarDate::parse("202401311").is_err()); // Too long
        assert!(CalendarDate::parse("2024-1-31").is_err());
        assert!(CalendarDate::parse("+2024013").is_err());
        assert!(CalendarDate::parse(" 20240131").is_err());
        assert!(CalendarDate::parse("ooo").is_err());
        assert!(CalendarDate::parse("").is_err());
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(CalendarDate::parse("15000156").is_err());
        assert!(CalendarDate::parse("20241301").is_err());
        assert!(CalendarDate::parse("20240000").is_err());
        assert!(CalendarDate::parse("20230229").is_err());
        assert!(CalendarDate::parse("20240229").is_ok());
        assert!(CalendarDate::parse("19000229").is_err());
        assert!(CalendarDate::parse("20000229").is_ok());
    }

    #[test]
    fn parse_error_names_input() {
        let err = CalendarDate::parse("2024-01-01").unwrap_err();
        assert_eq!(err.input, "2024-01-01");
        assert!(err.to_string().contains("2024-01-01"));
    }

    #[test]
    fn display_pads_small_years() {
        let d = CalendarDate::from_ymd(812, 3, 4).unwrap();
        assert_eq!(d.to_string(), "08120304");
        assert_eq!(date("08120304"), d);
        assert_eq!(date("00000101").year(), 0);
        assert_eq!(date("99991231").to_string(), "99991231");
    }

    #[test]
    fn days_in_month_tracks_leap_years() {
        assert_eq!(date("20240210").days_in_month(), 29);
        assert_eq!(date("20230210").days_in_month(), 28);
        assert_eq!(date("21000210").days_in_month(), 28);
        assert_eq!(date("20000210").days_in_month(), 29);
        assert_eq!(date("20240410").days_in_month(), 30);
        assert_eq!(date("20241210").days_in_month(), 31);
        assert_eq!(date("00000210").days_in_month(), 29);
    }

    #[test]
    fn iso_weekday_starts_monday() {
        assert_eq!(date("20240101").iso_weekday(), 1);
        assert_eq!(date("20240107").iso_weekday(), 7);
    }

    #[test]
    fn add_year_rolls_leap_day_forward() {
        assert_eq!(date("20240229").add_year(), Some(date("20250301")));
        assert_eq!(date("20230301").add_year(), Some(date("20240301")));
        assert_eq!(date("20231231").add_year(), Some(date("20241231")));
    }

    #[test]
    fn arithmetic_stops_at_year_9999() {
        let end = date("99991231");
        assert_eq!(end.succ(), None);
        assert_eq!(end.add_year(), None);
        assert_eq!(date("99991201").add_days(30), Some(end));
        assert_eq!(date("99991201").add_days(31), None);
    }

    #[test]
    fn days_since_is_signed() {
        assert_eq!(date("20240301").days_since(date("20240201")), 29);
        assert_eq!(date("20240201").days_since(date("20240301")), -29);
    }
}
