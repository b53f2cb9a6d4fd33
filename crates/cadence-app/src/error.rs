use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RuleError(#[from] cadence_rule::RuleError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),

    #[error("Invalid current date: {0}")]
    InvalidNow(#[source] cadence_rule::DateParseError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
