//! Domain Layer
//!
//! Contains the activity entity and the repository trait.

pub mod entities;
pub mod repository;

// Re-exports
pub use entities::Activity;
pub use repository::ActivityRepository;
