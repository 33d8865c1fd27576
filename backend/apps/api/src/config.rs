//! Environment Configuration

use std::path::PathBuf;

use admin::{AdminConfig, AdminResult};
use anyhow::Context;

/// Placeholder value shipped for `TEACHER_SECRET_KEY`
pub const DEFAULT_SECRET_KEY: &str = "change-me-in-production";

/// Server configuration read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Disables the `Secure` cookie flag
    pub debug: bool,
    pub environment: String,
    /// Reserved; no logic reads it yet
    pub secret_key: String,
    pub admin_username: String,
    /// `None` when unset or empty
    pub admin_password_hash: Option<String>,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => 8000,
        };

        Ok(Self {
            debug: lookup("DEBUG").is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
            environment: get_or("ENVIRONMENT", "development"),
            secret_key: get_or("TEACHER_SECRET_KEY", DEFAULT_SECRET_KEY),
            admin_username: get_or("ADMIN_USERNAME", "admin"),
            admin_password_hash: lookup("ADMIN_PASSWORD_HASH").filter(|v| !v.trim().is_empty()),
            static_dir: PathBuf::from(get_or("STATIC_DIR", "static")),
            host: get_or("HOST", "0.0.0.0"),
            port,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// True when production still runs with the shipped placeholder key
    pub fn has_insecure_secret_key(&self) -> bool {
        self.is_production() && self.secret_key == DEFAULT_SECRET_KEY
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Admin gate config; fails if the configured hash does not parse
    pub fn admin_config(&self) -> AdminResult<AdminConfig> {
        AdminConfig::from_settings(
            self.admin_username.clone(),
            self.admin_password_hash.as_deref(),
            self.debug,
        )
    }
}
