//! Application Layer
//!
//! Use cases and configuration.

pub mod check_session;
pub mod config;
pub mod login;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AdminConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
