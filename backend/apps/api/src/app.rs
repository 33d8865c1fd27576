//! Router Assembly

use std::path::Path;

use activities::{InMemoryActivityRepository, activities_router};
use admin::{AdminConfig, admin_router};
use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Landing page of the static front-end
pub const INDEX_PATH: &str = "/static/index.html";

/// Build the full application router
///
/// - `/` redirects to the front-end
/// - `/activities/...` registry endpoints
/// - `/admin/...` admin gate
/// - `/static/...` files from `static_dir`
pub fn build_router(
    repo: InMemoryActivityRepository,
    admin: AdminConfig,
    static_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .merge(activities_router(repo))
        .nest("/admin", admin_router(admin))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
