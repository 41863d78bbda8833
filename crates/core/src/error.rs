// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed domain input (empty title, negative salary, bad equity)
    #[error("Validation error: {0}")]
    Validation(#[from] crate::domain::DomainError),

    /// Caller supplied nothing to act on (e.g. an empty partial update)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for failures the caller can fix by changing its request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::InvalidInput(_)
                | AppError::NotFound(_)
                | AppError::AlreadyExists(_)
        )
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by mapping into AppError::AlreadyExists / AppError::Database

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_domain_error_becomes_validation() {
        let err: AppError = DomainError::EmptyTitle.into();
        assert!(matches!(err, AppError::Validation(DomainError::EmptyTitle)));
        assert!(err.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::InvalidInput("No data".into()).is_client_error());
        assert!(AppError::NotFound("job 1".into()).is_client_error());
        assert!(AppError::AlreadyExists("dup".into()).is_client_error());
        assert!(!AppError::Database("disk I/O error".into()).is_client_error());
        assert!(!AppError::Config("bad url".into()).is_client_error());
    }
}
