//! Admin Session Gate Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Configured credential and the session marker
//! - `application/` - Use cases (login, session check) and configuration
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Security Model
//! - One configured admin; the password is stored only as an Argon2id hash
//! - Verification runs on the blocking pool and compares in constant time
//! - The session is a bare `teacher_auth=1` marker cookie: no expiry, no
//!   identity, no server-side record. Anyone able to set that cookie is admin.
//! - No rate limiting, lockout or CSRF protection

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AdminConfig;
pub use error::{AdminError, AdminResult};
pub use presentation::router::admin_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
