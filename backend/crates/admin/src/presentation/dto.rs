//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Login form
///
/// Extracted from `application/x-www-form-urlencoded` or `multipart/form-data`
/// bodies; see `presentation::extract`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Confirmation body for login / logout
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body for GET /admin/status
#[derive(Debug, Clone, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}
