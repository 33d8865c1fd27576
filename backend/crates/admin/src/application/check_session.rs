//! Check Session Use Case
//!
//! Decides whether a request carries the admin session marker.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::extract_cookie;

use crate::application::config::AdminConfig;
use crate::domain::credential::is_session_marker;
use crate::error::{AdminError, AdminResult};

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AdminConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AdminConfig>) -> Self {
        Self { config }
    }

    /// Fails with `AdminRequired` unless the marker cookie is present and exact
    pub fn execute(&self, headers: &HeaderMap) -> AdminResult<()> {
        if self.is_admin(headers) {
            Ok(())
        } else {
            Err(AdminError::AdminRequired)
        }
    }

    pub fn is_admin(&self, headers: &HeaderMap) -> bool {
        extract_cookie(headers, &self.config.cookie.name)
            .is_some_and(|value| is_session_marker(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credential::AdminCredential;
    use axum::http::{HeaderValue, header};

    fn use_case() -> CheckSessionUseCase {
        let config = AdminConfig::new(AdminCredential::new("admin", None), false);
        CheckSessionUseCase::new(Arc::new(config))
    }

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_marker_present() {
        assert!(use_case().execute(&headers("teacher_auth=1")).is_ok());
        assert!(
            use_case()
                .execute(&headers("theme=dark; teacher_auth=1"))
                .is_ok()
        );
    }

    #[test]
    fn test_marker_missing_or_wrong() {
        let use_case = use_case();
        assert!(matches!(
            use_case.execute(&HeaderMap::new()),
            Err(AdminError::AdminRequired)
        ));
        assert!(!use_case.is_admin(&headers("teacher_auth=0")));
        assert!(!use_case.is_admin(&headers("teacher_auth=")));
        assert!(!use_case.is_admin(&headers("other_auth=1")));
    }
}
