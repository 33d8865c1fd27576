//! Admin Middleware
//!
//! Middleware for requiring the admin session marker on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::CheckSessionUseCase;
use crate::error::AdminError;
use crate::presentation::handlers::AdminAppState;

/// Rejects the request with 403 unless it carries `teacher_auth=1`
pub async fn require_admin(
    State(state): State<AdminAppState>,
    req: Request,
    next: Next,
) -> Result<Response, AdminError> {
    CheckSessionUseCase::new(state.config.clone()).execute(req.headers())?;

    Ok(next.run(req).await)
}
