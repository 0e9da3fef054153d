use thiserror::Error;

use crate::services::classification::ClassificationError;
use crate::services::documents::DocumentError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Rewrites a unique-constraint violation into `ConstraintViolation`
    /// with the given message; any other error passes through unchanged.
    pub fn map_unique_violation(self, message: &str) -> StorageError {
        if self.is_unique_violation() {
            return StorageError::ConstraintViolation(message.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_unique_violation_leaves_other_errors() {
        let err = StorageError::NotFound.map_unique_violation("name taken");
        assert!(matches!(err, StorageError::NotFound));

        let err = StorageError::Database(sqlx::Error::RowNotFound).map_unique_violation("taken");
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[test]
    fn test_row_not_found_is_not_a_violation() {
        let err = StorageError::Database(sqlx::Error::RowNotFound);
        assert!(!err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());
    }
}
