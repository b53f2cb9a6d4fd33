//! Repeat rule syntax errors.

use std::fmt;

/// Result type for rule parsing operations.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Error type for a malformed repeat rule expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Kind of error.
    pub kind: SyntaxErrorKind,
    /// The offending token or parameter, when there is one.
    pub context: Option<String>,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(kind: SyntaxErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Kinds of syntax errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Empty expression or unknown tag.
    UnrecognizedRule,
    /// Too few or too many parameters for the tag.
    WrongParameterCount,
    /// A list entry or parameter is not an integer.
    InvalidInteger,
    /// An integer outside the range allowed for its position.
    OutOfRange,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedRule => write!(f, "unrecognized repeat rule"),
            Self::WrongParameterCount => write!(f, "wrong number of parameters"),
            Self::InvalidInteger => write!(f, "invalid integer"),
            Self::OutOfRange => write!(f, "value out of range"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
