// sqlx::Error -> AppError mapping

use jobly_core::error::AppError;

/// Constraint failures the repositories react to individually
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintViolation {
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

/// Classify a SQLite constraint failure by its extended result code
pub(crate) fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    // SQLite error codes: https://www.sqlite.org/rescode.html
    match db_err.code().as_deref() {
        Some("2067") | Some("1555") => Some(ConstraintViolation::Unique),
        Some("787") | Some("3850") => Some(ConstraintViolation::ForeignKey),
        Some("275") => Some(ConstraintViolation::Check),
        Some("1299") => Some(ConstraintViolation::NotNull),
        _ if db_err.is_unique_violation() => Some(ConstraintViolation::Unique),
        _ if db_err.is_foreign_key_violation() => Some(ConstraintViolation::ForeignKey),
        _ if db_err.is_check_violation() => Some(ConstraintViolation::Check),
        _ => None,
    }
}

// Helper to convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    if let Some(violation) = constraint_violation(&err) {
        let message = match &err {
            sqlx::Error::Database(db_err) => db_err.message().to_string(),
            other => other.to_string(),
        };
        return match violation {
            ConstraintViolation::Unique => AppError::AlreadyExists(message),
            ConstraintViolation::ForeignKey => {
                AppError::Database(format!("Foreign key constraint violation: {}", message))
            }
            ConstraintViolation::Check => {
                AppError::Database(format!("Check constraint violation: {}", message))
            }
            ConstraintViolation::NotNull => {
                AppError::Database(format!("Not null constraint violation: {}", message))
            }
        };
    }

    match &err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // SQLITE_BUSY - database is locked
            Some("5") => {
                AppError::Database(format!("Database locked (SQLITE_BUSY): {}", db_err.message()))
            }
            // SQLITE_FULL - database or disk is full
            Some("13") => AppError::Database(format!("Database full: {}", db_err.message())),
            Some(code) => AppError::Database(format!(
                "Database error [{}]: {}",
                code,
                db_err.message()
            )),
            None => AppError::Database(format!("Database error: {}", db_err.message())),
        },
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_generic_backend_failures() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(constraint_violation(&sqlx::Error::PoolTimedOut), None);

        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Database(_)));
    }
}
