//! Application Layer - Use Cases
//!
//! Orchestrates roster changes against the repository and reports the outcome.

pub mod list_activities;
pub mod sign_up;
pub mod unregister;

// Re-exports
pub use list_activities::ListActivitiesUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use unregister::{UnregisterInput, UnregisterOutput, UnregisterUseCase};
