//! End-to-end tests against the assembled router

use std::sync::OnceLock;

use activities::InMemoryActivityRepository;
use admin::AdminConfig;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use mergington_api::build_router;
use platform::password::ClearTextPassword;
use tower::ServiceExt;

const ADMIN_PASSWORD: &str = "Mergington#Staff2024";

fn admin_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        ClearTextPassword::new(ADMIN_PASSWORD.to_string())
            .unwrap()
            .hash()
            .unwrap()
            .as_phc_string()
            .to_string()
    })
    .clone()
}

struct TestApp {
    router: Router,
    _static_dir: tempfile::TempDir,
}

impl TestApp {
    fn new() -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            static_dir.path().join("index.html"),
            "<h1>Mergington High School</h1>",
        )
        .unwrap();

        let hash = admin_hash();
        let admin = AdminConfig::from_settings("admin", Some(&hash), true).unwrap();
        let router = build_router(
            InMemoryActivityRepository::seeded(),
            admin,
            static_dir.path(),
        );

        Self {
            router,
            _static_dir: static_dir,
        }
    }

    async fn request(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn send(&self, method: Method, uri: &str) -> Response {
        self.request(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn login(&self, username: &str, password: &str) -> Response {
        self.request(
            Request::builder()
                .method(Method::POST)
                .uri("/admin/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "username={username}&password={}",
                    password.replace('#', "%23")
                )))
                .unwrap(),
        )
        .await
    }

    async fn admin_status(&self, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::GET).uri("/admin/status");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }
}

async fn json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` part of a Set-Cookie header
fn cookie_pair(response: &Response) -> String {
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn root_redirects_to_front_end() {
    let app = TestApp::new();
    let response = app.send(Method::GET, "/").await;

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers()[header::LOCATION],
        "/static/index.html"
    );
}

#[tokio::test]
async fn static_files_are_served() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/static/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send(Method::GET, "/static/missing.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sign_up_appears_in_listing() {
    let app = TestApp::new();

    let response = app
        .send(
            Method::POST,
            "/activities/Chess%20Club/signup?email=new@mergington.edu",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json(response).await["message"],
        "Signed up new@mergington.edu for Chess Club"
    );

    let listing = json(app.send(Method::GET, "/activities").await).await;
    assert_eq!(
        listing["Chess Club"]["participants"],
        serde_json::json!([
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "new@mergington.edu"
        ])
    );
}

#[tokio::test]
async fn roster_conflicts_are_bad_requests() {
    let app = TestApp::new();

    let response = app
        .send(
            Method::POST,
            "/activities/Chess%20Club/signup?email=michael@mergington.edu",
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(response).await["detail"], "Student is already signed up");

    let response = app
        .send(
            Method::DELETE,
            "/activities/Chess%20Club/unregister?email=nobody@mergington.edu",
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let listing = json(app.send(Method::GET, "/activities").await).await;
    assert_eq!(
        listing["Chess Club"]["participants"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn unknown_activity_is_not_found() {
    let app = TestApp::new();
    let response = app
        .send(
            Method::POST,
            "/activities/Nonexistent%20Club/signup?email=new@mergington.edu",
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn admin_session_lifecycle() {
    let app = TestApp::new();

    let response = app.admin_status(None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.login("admin", ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = cookie_pair(&response);
    assert_eq!(cookie, "teacher_auth=1");
    assert_eq!(json(response).await["message"], "Logged in as admin");

    let response = app.admin_status(Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await["admin"], true);

    let response = app.send(Method::POST, "/admin/logout").await;
    assert_eq!(response.status(), StatusCode::OK);
    // Browser applies Max-Age=0 and drops the cookie
    assert_eq!(cookie_pair(&response), "teacher_auth=");

    let response = app.admin_status(None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn bad_login_sets_no_cookie() {
    let app = TestApp::new();

    for (username, password) in [("admin", "not-the-password"), ("principal", ADMIN_PASSWORD)] {
        let response = app.login(username, password).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
