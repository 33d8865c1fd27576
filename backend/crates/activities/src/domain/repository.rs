//! Repository Traits
//!
//! Interfaces for the activity table. Implementation is in the infra layer.

use crate::domain::entities::Activity;
use crate::error::ActivityResult;

/// Activity repository trait
///
/// Roster mutations are atomic: the membership check and the change are
/// performed as one step by the implementation.
#[trait_variant::make(ActivityRepository: Send)]
pub trait LocalActivityRepository {
    /// Snapshot of every activity, in catalog order
    async fn list(&self) -> ActivityResult<Vec<Activity>>;

    /// Find a single activity by name
    async fn find_by_name(&self, name: &str) -> ActivityResult<Option<Activity>>;

    /// Append a participant; returns the updated activity
    async fn add_participant(&self, name: &str, email: &str) -> ActivityResult<Activity>;

    /// Remove a participant; returns the updated activity
    async fn remove_participant(&self, name: &str, email: &str) -> ActivityResult<Activity>;
}
