//! Login Use Case
//!
//! Checks a username/password pair against the configured admin credential.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AdminConfig;
use crate::domain::credential::SESSION_MARKER;
use crate::error::{AdminError, AdminResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub message: String,
    /// Value for the session cookie
    pub session_value: &'static str,
}

/// Login use case
pub struct LoginUseCase {
    config: Arc<AdminConfig>,
}

impl LoginUseCase {
    pub fn new(config: Arc<AdminConfig>) -> Self {
        Self { config }
    }

    /// Checks run in a fixed order: username, then hash presence, then password.
    pub async fn execute(&self, input: LoginInput) -> AdminResult<LoginOutput> {
        let credential = &self.config.credential;

        if !credential.matches_username(&input.username) {
            return Err(AdminError::InvalidCredentials);
        }

        let hash = credential
            .password_hash
            .clone()
            .ok_or(AdminError::PasswordNotConfigured)?;

        let password = ClearTextPassword::for_verification(input.password);

        // Argon2 is CPU-bound
        let valid = tokio::task::spawn_blocking(move || hash.verify(&password)).await?;

        if !valid {
            return Err(AdminError::InvalidCredentials);
        }

        tracing::info!("Admin logged in");

        Ok(LoginOutput {
            message: "Logged in as admin".to_string(),
            session_value: SESSION_MARKER,
        })
    }
}
