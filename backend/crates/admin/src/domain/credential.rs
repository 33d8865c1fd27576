//! Admin Credential

use platform::crypto::constant_time_eq;
use platform::password::HashedPassword;

/// Cookie value that marks an admin session
pub const SESSION_MARKER: &str = "1";

/// True only for the exact marker value
pub fn is_session_marker(value: &str) -> bool {
    constant_time_eq(value.as_bytes(), SESSION_MARKER.as_bytes())
}

/// The single configured admin account
///
/// `password_hash` is `None` when no hash is configured; login is then
/// refused as a server misconfiguration.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub username: String,
    pub password_hash: Option<HashedPassword>,
}

impl AdminCredential {
    pub fn new(username: impl Into<String>, password_hash: Option<HashedPassword>) -> Self {
        Self {
            username: username.into(),
            password_hash,
        }
    }

    pub fn matches_username(&self, candidate: &str) -> bool {
        constant_time_eq(self.username.as_bytes(), candidate.as_bytes())
    }

    pub fn is_login_enabled(&self) -> bool {
        self.password_hash.is_some()
    }
}
