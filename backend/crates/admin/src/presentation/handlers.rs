//! HTTP Handlers

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::application::{LoginInput, LoginUseCase};
use crate::error::AdminResult;
use crate::presentation::dto::{AdminStatusResponse, LoginForm, MessageResponse};

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState {
    pub config: Arc<AdminConfig>,
}

/// POST /admin/login
pub async fn login(
    State(state): State<AdminAppState>,
    form: LoginForm,
) -> AdminResult<impl IntoResponse> {
    let use_case = LoginUseCase::new(state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: form.username,
            password: form.password,
        })
        .await?;

    let cookie = state.config.cookie.build_set_cookie(output.session_value);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: output.message,
        }),
    ))
}

/// POST /admin/logout
///
/// Always succeeds, with or without a session.
pub async fn logout(State(state): State<AdminAppState>) -> impl IntoResponse {
    let cookie = state.config.cookie.build_delete_cookie();

    tracing::info!("Admin logged out");

    (
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// GET /admin/status
///
/// Only reachable through `require_admin`.
pub async fn status() -> Json<AdminStatusResponse> {
    Json(AdminStatusResponse { admin: true })
}
