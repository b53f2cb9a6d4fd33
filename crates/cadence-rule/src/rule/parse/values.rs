//! Integer and list parameter parsers.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::error::{ParseResult, SyntaxError, SyntaxErrorKind};

/// Parses a single integer and checks it against `range`.
///
/// Surrounding whitespace is trimmed. Leading zeros and a `+` sign are
/// accepted (`07` is seven).
///
/// ## Errors
/// `InvalidInteger` if the token is not an integer, `OutOfRange` if it is
/// outside `range`.
pub fn parse_bounded<T>(token: &str, range: &RangeInclusive<T>) -> ParseResult<T>
where
    T: TryFrom<i64> + PartialOrd,
{
    let token = token.trim();
    let value = token.parse::<i64>().map_err(|_err| {
        SyntaxError::new(SyntaxErrorKind::InvalidInteger).with_context(token)
    })?;

    T::try_from(value)
        .ok()
        .filter(|value| range.contains(value))
        .ok_or_else(|| SyntaxError::new(SyntaxErrorKind::OutOfRange).with_context(token))
}

/// Parses a comma-separated list of integers within `range`.
///
/// Every entry is trimmed; an empty entry (`1,,3`) is an invalid integer.
///
/// ## Errors
/// Returns the first entry's error, see [`parse_bounded`].
pub fn parse_bounded_list<T>(s: &str, range: &RangeInclusive<T>) -> ParseResult<BTreeSet<T>>
where
    T: TryFrom<i64> + Ord,
{
    s.split(',')
        .map(|entry| parse_bounded(entry, range))
        .collect()
}
