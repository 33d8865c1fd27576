//! Activity Registry Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Activity entity, roster rules, repository trait
//! - `application/` - Use cases (list, sign up, unregister)
//! - `infra/` - In-memory repository and the seed catalog
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Consistency Model
//! - The whole table sits behind one async `RwLock`
//! - Membership check and roster mutation happen under the same write guard
//! - Rosters live for the process lifetime; nothing is persisted
//! - `max_participants` is informational and never enforced on sign up

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::Activity;
pub use error::{ActivityError, ActivityResult};
pub use infra::memory::InMemoryActivityRepository;
pub use presentation::router::activities_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
