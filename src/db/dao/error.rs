use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("{entity} already exists")]
    Conflict { entity: &'static str },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

impl DaoLayerError {
    /// Unique index violations become `Conflict`; everything else stays a
    /// database error.
    pub fn classify(entity: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DaoLayerError::Conflict { entity },
            _ => DaoLayerError::Db(err),
        }
    }
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl From<DbErr> for DaoLayerError {
    fn from(err: DbErr) -> Self {
        DaoLayerError::Db(err)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::DaoLayerError;

    #[test]
    fn non_constraint_errors_stay_database_errors() {
        let err = DaoLayerError::classify("users", DbErr::Custom("boom".to_string()));
        assert!(matches!(err, DaoLayerError::Db(_)));
    }

    #[test]
    fn conflict_message_names_the_entity() {
        let err = DaoLayerError::Conflict { entity: "users" };
        assert_eq!(err.to_string(), "users already exists");
    }
}
