//! Activity Error Types
//!
//! Registry-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Activity-specific result type alias
pub type ActivityResult<T> = Result<T, ActivityError>;

/// Activity-specific error variants
///
/// Roster conflicts are reported to clients as 400, matching the behavior
/// the front-end already relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    /// No activity with that name
    #[error("Activity not found")]
    ActivityNotFound,

    /// Email already on the roster
    #[error("Student is already signed up")]
    AlreadySignedUp,

    /// Email not on the roster
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl ActivityError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::ActivityNotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::ActivityNotFound => ErrorKind::NotFound,
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ActivityError::ActivityNotFound => AppError::not_found(self.to_string()),
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => {
                AppError::bad_request(self.to_string())
            }
        }
    }

    fn log(&self) {
        tracing::debug!(error = %self, "Activity request rejected");
    }
}

impl From<ActivityError> for AppError {
    fn from(err: ActivityError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
