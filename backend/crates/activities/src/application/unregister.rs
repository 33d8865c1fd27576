//! Unregister Use Case
//!
//! Removes a student from an activity roster.

use std::sync::Arc;

use crate::domain::repository::ActivityRepository;
use crate::error::ActivityResult;

/// Unregister input
#[derive(Debug, Clone)]
pub struct UnregisterInput {
    pub activity_name: String,
    pub email: String,
}

/// Unregister output
#[derive(Debug, Clone)]
pub struct UnregisterOutput {
    pub message: String,
    pub participant_count: usize,
}

/// Unregister use case
pub struct UnregisterUseCase<R>
where
    R: ActivityRepository,
{
    repo: Arc<R>,
}

impl<R> UnregisterUseCase<R>
where
    R: ActivityRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UnregisterInput) -> ActivityResult<UnregisterOutput> {
        let activity = self
            .repo
            .remove_participant(&input.activity_name, &input.email)
            .await?;

        tracing::info!(
            activity = %activity.name,
            participants = activity.participants.len(),
            "Student unregistered"
        );

        Ok(UnregisterOutput {
            message: format!("Unregistered {} from {}", input.email, input.activity_name),
            participant_count: activity.participants.len(),
        })
    }
}
