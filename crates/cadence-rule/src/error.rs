use thiserror::Error;

use crate::rule::core::DateParseError;
use crate::rule::parse::SyntaxError;

/// Recurrence engine errors
///
/// None of these are transient: the engine is deterministic, so the same
/// inputs always reproduce the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid repeat rule: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Invalid base date: {0}")]
    InvalidBaseDate(#[source] DateParseError),

    #[error("No occurrence found within {limit} days")]
    SearchExhausted { limit: u32 },

    #[error("Next occurrence is outside the supported date range")]
    OutOfRange,
}

impl RuleError {
    /// Whether the rule itself is at fault, as opposed to the stored base date.
    #[must_use]
    pub const fn is_rule_rejection(&self) -> bool {
        !matches!(self, Self::InvalidBaseDate(_))
    }
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
