//! Domain errors

use thiserror::Error;

/// Caller-facing domain errors.
///
/// Every variant except [`DomainError::Storage`] is a deterministic,
/// non-retryable rejection: retrying the same call with the same inputs
/// yields the same error. The HTTP layer translates each into a status
/// code and message; nothing here is retried internally.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("The authenticated account cannot delete itself")]
    CannotDeleteSelf,

    #[error("Invalid transition: cabin is {from}, cannot {action}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("Cabin {0} already has an open issue")]
    IssueAlreadyActive(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Issue {0} is already resolved")]
    AlreadyResolved(String),

    /// Storage/database error mapped from the persistence layer.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried by the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
