//! Admin Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::presentation::handlers::{self, AdminAppState};
use crate::presentation::middleware::require_admin;

/// Create the admin router; nest it under `/admin`
pub fn admin_router(config: AdminConfig) -> Router {
    let state = AdminAppState {
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/status", get(handlers::status))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .merge(protected)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credential::AdminCredential;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use platform::password::{ClearTextPassword, HashedPassword};
    use std::sync::OnceLock;
    use tower::ServiceExt;

    const PASSWORD: &str = "Mergington#Staff2024";

    fn hashed() -> HashedPassword {
        static HASH: OnceLock<HashedPassword> = OnceLock::new();
        HASH.get_or_init(|| {
            ClearTextPassword::new(PASSWORD.to_string())
                .unwrap()
                .hash()
                .unwrap()
        })
        .clone()
    }

    fn app(hash: Option<HashedPassword>) -> Router {
        admin_router(AdminConfig::new(AdminCredential::new("admin", hash), true))
    }

    async fn login(app: &Router, username: &str, password: &str) -> Response {
        let body = format!("username={username}&password={password}");
        app.clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn multipart_login(app: &Router, fields: &[(&str, &str)]) -> Response {
        const BOUNDARY: &str = "----mergington-boundary";
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        app.clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/login")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn status(app: &Router, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::GET).uri("/status");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        app.clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_sets_marker_cookie() {
        let app = app(Some(hashed()));
        let response = login(&app, "admin", "Mergington%23Staff2024").await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("teacher_auth=1"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Secure"));

        assert_eq!(json(response).await["message"], "Logged in as admin");
    }

    #[tokio::test]
    async fn test_multipart_login() {
        let app = app(Some(hashed()));
        let response =
            multipart_login(&app, &[("username", "admin"), ("password", PASSWORD)]).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("teacher_auth=1"));

        let response =
            multipart_login(&app, &[("username", "admin"), ("password", "wrong")]).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_multipart_login_missing_field() {
        let app = app(Some(hashed()));
        let response = multipart_login(&app, &[("username", "admin")]).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_sets_no_cookie() {
        let app = app(Some(hashed()));
        let response = login(&app, "admin", "wrong").await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(json(response).await["detail"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_unconfigured_hash() {
        let app = app(None);

        let response = login(&app, "admin", "anything").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(response).await["detail"], "Admin password not configured");

        let response = login(&app, "someone", "anything").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_status_requires_marker() {
        let app = app(None);

        let response = status(&app, None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json(response).await["detail"], "Admin privileges required");

        let response = status(&app, Some("teacher_auth=yes")).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = status(&app, Some("teacher_auth=1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await, serde_json::json!({ "admin": true }));
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let app = app(None);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("teacher_auth=;"));
        assert!(cookie.contains("Max-Age=0"));

        assert_eq!(json(response).await["message"], "Logged out");
    }
}
