//! Application Configuration
//!
//! Configuration for the admin gate.

use platform::cookie::CookieConfig;
use platform::password::HashedPassword;

use crate::domain::credential::AdminCredential;
use crate::error::AdminResult;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Name of the admin session cookie
pub const ADMIN_COOKIE_NAME: &str = "teacher_auth";

/// Admin application configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub credential: AdminCredential,
    /// Session marker cookie attributes
    pub cookie: CookieConfig,
}

impl AdminConfig {
    /// Build config from raw settings
    ///
    /// An empty or absent hash disables login. A non-empty hash that does not
    /// parse is an error: it would otherwise fail every login silently.
    pub fn from_settings(
        username: impl Into<String>,
        password_hash: Option<&str>,
        debug: bool,
    ) -> AdminResult<Self> {
        let password_hash = match password_hash.map(str::trim) {
            Some(hash) if !hash.is_empty() => Some(HashedPassword::from_hash_string(hash)?),
            _ => None,
        };

        Ok(Self::new(AdminCredential::new(username, password_hash), debug))
    }

    /// `debug` drops the `Secure` flag so the cookie works over plain HTTP
    pub fn new(credential: AdminCredential, debug: bool) -> Self {
        Self {
            credential,
            cookie: CookieConfig {
                secure: !debug,
                same_site: SameSite::Lax,
                ..CookieConfig::named(ADMIN_COOKIE_NAME)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use platform::password::HashAlgorithm;

    #[test]
    fn test_empty_hash_disables_login() {
        let config = AdminConfig::from_settings("admin", Some("  "), false).unwrap();
        assert!(!config.credential.is_login_enabled());

        let config = AdminConfig::from_settings("admin", None, false).unwrap();
        assert!(!config.credential.is_login_enabled());
    }

    #[test]
    fn test_garbage_hash_is_rejected() {
        let result = AdminConfig::from_settings("admin", Some("hunter2"), false);
        assert!(matches!(result, Err(AdminError::InvalidPasswordHash(_))));
    }

    #[test]
    fn test_bcrypt_hash_accepted() {
        let hash = bcrypt::hash("Mergington#Staff2024", 4).unwrap();
        let config = AdminConfig::from_settings("admin", Some(&hash), false).unwrap();

        let stored = config.credential.password_hash.unwrap();
        assert_eq!(stored.algorithm(), HashAlgorithm::Bcrypt);
    }

    #[test]
    fn test_cookie_attributes() {
        let production = AdminConfig::from_settings("admin", None, false).unwrap();
        assert_eq!(
            production.cookie.build_set_cookie("1"),
            "teacher_auth=1; HttpOnly; Secure; SameSite=Lax; Path=/"
        );

        let debug = AdminConfig::from_settings("admin", None, true).unwrap();
        assert_eq!(
            debug.cookie.build_set_cookie("1"),
            "teacher_auth=1; HttpOnly; SameSite=Lax; Path=/"
        );
    }
}
