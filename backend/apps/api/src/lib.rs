//! Mergington High School activities API
//!
//! Router assembly and environment configuration shared by the server
//! binary and the integration tests.

pub mod app;
pub mod config;

pub use app::build_router;
pub use config::AppConfig;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
