//! Activity Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::infra::memory::InMemoryActivityRepository;
use crate::presentation::handlers::{self, ActivityAppState};

/// Create the activity router backed by the in-memory table
pub fn activities_router(repo: InMemoryActivityRepository) -> Router {
    let state = ActivityAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/activities",
            get(handlers::list_activities::<InMemoryActivityRepository>),
        )
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::sign_up::<InMemoryActivityRepository>),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::unregister::<InMemoryActivityRepository>),
        )
        .with_state(state)
}
