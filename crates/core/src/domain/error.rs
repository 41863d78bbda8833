// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Job title must not be empty")]
    EmptyTitle,

    #[error("Salary must be non-negative, got {0}")]
    NegativeSalary(i64),

    #[error("Invalid equity '{0}': expected a decimal between 0 and 1")]
    InvalidEquity(String),

    #[error("Company handle must not be empty")]
    EmptyHandle,

    #[error("Employee count must be non-negative, got {0}")]
    NegativeEmployees(i32),

    #[error("Username must not be empty")]
    EmptyUsername,
}

pub type Result<T> = std::result::Result<T, DomainError>;
