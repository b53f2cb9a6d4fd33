//! Repeat rule expression grammar.
//!
//! An expression is a one-letter tag followed by whitespace-separated
//! parameters. Parsing is pure; every range is checked here so the advancer
//! never sees an unchecked value.

use std::collections::BTreeSet;

use super::error::{ParseResult, SyntaxError, SyntaxErrorKind};
use super::values::{parse_bounded, parse_bounded_list};
use crate::rule::core::{
    MAX_INTERVAL_DAYS, MAX_MONTH, MAX_MONTH_DAY, MAX_WEEKDAY, MIN_INTERVAL_DAYS, MIN_MONTH,
    MIN_MONTH_DAY, MIN_WEEKDAY, RecurrenceRule,
};

/// ## Summary
/// Parses a repeat rule expression (`d 7`, `y`, `w 1,3,5`, `m -1 2,3`).
///
/// ## Errors
/// Returns `SyntaxError` for an empty expression, an unknown tag, a wrong
/// number of parameters, or a parameter that is not an integer in range.
pub fn parse_rule(input: &str) -> ParseResult<RecurrenceRule> {
    let input = input.trim();
    let (tag, params) = input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(tag, params)| (tag, params.trim()));

    let rule = match tag {
        "d" => parse_every_n_days(params)?,
        "y" => parse_yearly(params)?,
        "w" => parse_weekly(params)?,
        "m" => parse_monthly(params)?,
        "" => return Err(SyntaxError::new(SyntaxErrorKind::UnrecognizedRule)),
        _ => {
            return Err(SyntaxError::new(SyntaxErrorKind::UnrecognizedRule).with_context(input));
        }
    };

    tracing::trace!(input, rule = %rule, "Parsed repeat rule");
    Ok(rule)
}

/// `d <n>`: exactly one integer in 1..=400.
fn parse_every_n_days(params: &str) -> ParseResult<RecurrenceRule> {
    let [interval] = split_params::<1, 1>("d", params)?;
    let interval = interval.ok_or_else(|| wrong_count("d", params))?;
    parse_bounded(interval, &(MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS))
        .map(RecurrenceRule::EveryNDays)
}

/// `y`: no parameters.
fn parse_yearly(params: &str) -> ParseResult<RecurrenceRule> {
    split_params::<0, 0>("y", params)?;
    Ok(RecurrenceRule::Yearly)
}

/// `w <list>`: the whole remainder is the weekday list, so `w 1, 3` is fine.
fn parse_weekly(params: &str) -> ParseResult<RecurrenceRule> {
    if params.is_empty() {
        return Err(wrong_count("w", params));
    }
    parse_bounded_list(params, &(MIN_WEEKDAY..=MAX_WEEKDAY)).map(RecurrenceRule::WeeklyOn)
}

/// `m <days>[ <months>]`.
fn parse_monthly(params: &str) -> ParseResult<RecurrenceRule> {
    let [days, months] = split_params::<1, 2>("m", params)?;
    let days = days.ok_or_else(|| wrong_count("m", params))?;

    let days = parse_bounded_list(days, &(MIN_MONTH_DAY..=MAX_MONTH_DAY))?;
    if days.contains(&0) {
        return Err(SyntaxError::new(SyntaxErrorKind::OutOfRange).with_context("0"));
    }

    let months = match months {
        Some(months) => parse_bounded_list(months, &(MIN_MONTH..=MAX_MONTH))?,
        None => BTreeSet::new(),
    };

    Ok(RecurrenceRule::MonthlyOn { days, months })
}

/// Splits `params` on whitespace into at most `MAX` slots and requires at
/// least `MIN` of them to be filled.
fn split_params<'a, const MIN: usize, const MAX: usize>(
    tag: &str,
    params: &'a str,
) -> ParseResult<[Option<&'a str>; MAX]> {
    let mut slots = [None; MAX];
    let mut count = 0;
    for token in params.split_whitespace() {
        let slot = slots
            .get_mut(count)
            .ok_or_else(|| wrong_count(tag, params))?;
        *slot = Some(token);
        count += 1;
    }
    if count < MIN {
        return Err(wrong_count(tag, params));
    }
    Ok(slots)
}

fn wrong_count(tag: &str, params: &str) -> SyntaxError {
    SyntaxError::new(SyntaxErrorKind::WrongParameterCount)
        .with_context(format!("{tag} {params}").trim_end().to_string())
}
