//! Admin Error Types
//!
//! Admin-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Admin-specific result type alias
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-specific error variants
#[derive(Debug, Error)]
pub enum AdminError {
    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempted while no password hash is configured
    #[error("Admin password not configured")]
    PasswordNotConfigured,

    /// Missing or invalid session marker
    #[error("Admin privileges required")]
    AdminRequired,

    /// Login form body could not be read
    #[error("Invalid login form: {0}")]
    InvalidLoginForm(String),

    /// Configured hash could not be parsed
    #[error("Invalid admin password hash: {0}")]
    InvalidPasswordHash(#[from] PasswordHashError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AdminError::AdminRequired => StatusCode::FORBIDDEN,
            AdminError::InvalidLoginForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AdminError::PasswordNotConfigured
            | AdminError::InvalidPasswordHash(_)
            | AdminError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::InvalidCredentials => ErrorKind::Unauthorized,
            AdminError::AdminRequired => ErrorKind::Forbidden,
            AdminError::InvalidLoginForm(_) => ErrorKind::UnprocessableEntity,
            AdminError::PasswordNotConfigured
            | AdminError::InvalidPasswordHash(_)
            | AdminError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal details stay in the logs, not in the response body.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AdminError::InvalidCredentials => AppError::unauthorized(self.to_string()),
            AdminError::AdminRequired => AppError::forbidden(self.to_string()),
            AdminError::InvalidLoginForm(_) => AppError::new(self.kind(), self.to_string()),
            AdminError::PasswordNotConfigured => AppError::internal(self.to_string())
                .with_action("Set ADMIN_PASSWORD_HASH and restart the server"),
            AdminError::InvalidPasswordHash(_) | AdminError::Internal(_) => {
                AppError::internal("Internal server error")
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdminError::InvalidCredentials => {
                tracing::warn!("Invalid admin login attempt");
            }
            AdminError::PasswordNotConfigured => {
                tracing::error!("Admin login attempted but ADMIN_PASSWORD_HASH is not set");
            }
            AdminError::InvalidPasswordHash(e) => {
                tracing::error!(error = %e, "Admin password hash rejected");
            }
            AdminError::Internal(msg) => {
                tracing::error!(message = %msg, "Admin internal error");
            }
            AdminError::AdminRequired | AdminError::InvalidLoginForm(_) => {
                tracing::debug!(error = %self, "Admin error");
            }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::InvalidPasswordHash(source) => {
                AppError::internal("Internal server error").with_source(source)
            }
            other => other.to_app_error(),
        }
    }
}

impl From<tokio::task::JoinError> for AdminError {
    fn from(err: tokio::task::JoinError) -> Self {
        AdminError::Internal(format!("password verification task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AdminError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AdminError::AdminRequired, StatusCode::FORBIDDEN),
            (
                AdminError::InvalidLoginForm("missing password".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AdminError::PasswordNotConfigured,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AdminError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
            assert_eq!(error.kind().status_code(), expected.as_u16());
        }
    }

    #[test]
    fn test_password_not_configured_has_action() {
        let app_error = AdminError::PasswordNotConfigured.to_app_error();
        assert_eq!(app_error.message(), "Admin password not configured");
        assert!(app_error.action().is_some());
    }

    #[test]
    fn test_app_error_kinds() {
        assert_eq!(
            AdminError::InvalidCredentials.to_app_error().kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            AdminError::AdminRequired.to_app_error().kind(),
            ErrorKind::Forbidden
        );
    }

    #[test]
    fn test_hash_error_kept_as_source() {
        let app_error = AppError::from(AdminError::InvalidPasswordHash(
            PasswordHashError::InvalidHashFormat,
        ));

        assert_eq!(app_error.status_code(), 500);
        assert_eq!(app_error.message(), "Internal server error");
        let source = std::error::Error::source(&app_error).unwrap();
        assert_eq!(source.to_string(), "Invalid password hash format");
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let app_error = AdminError::Internal("thread panicked".to_string()).to_app_error();
        assert!(!app_error.message().contains("panicked"));
    }
}
