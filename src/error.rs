use crate::{db::dao::DaoLayerError, validation::FieldViolation};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let message = if violations.is_empty() {
            "Validation failed".to_string()
        } else {
            violations
                .iter()
                .map(|violation| violation.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };
        Self::Validation {
            message,
            violations,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Logs the underlying cause and hides it from the caller.
    pub fn internal_with_source(message: impl Into<String>, source: impl std::fmt::Display) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{message}");
        Self::Internal(message)
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::Internal(message) => message.as_str(),
            Self::Validation { message, .. } => message.as_str(),
        }
    }
}

impl From<Vec<FieldViolation>> for AppError {
    fn from(violations: Vec<FieldViolation>) -> Self {
        AppError::validation(violations)
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::Conflict { .. } | DaoLayerError::InvalidPagination { .. } => {
                AppError::bad_request(err.to_string())
            }
            DaoLayerError::Db(db_err) => {
                AppError::internal_with_source("Storage operation failed", db_err)
            }
        }
    }
}
