use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RuleError(#[from] cadence_rule::RuleError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
