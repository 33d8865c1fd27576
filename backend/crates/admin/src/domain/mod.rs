//! Domain Layer
//!
//! The configured admin credential and the session marker.

pub mod credential;

// Re-exports
pub use credential::{AdminCredential, SESSION_MARKER, is_session_marker};
