//! Sign Up Use Case
//!
//! Adds a student to an activity roster.

use std::sync::Arc;

use crate::domain::repository::ActivityRepository;
use crate::error::ActivityResult;

/// Sign up input
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub activity_name: String,
    /// Taken verbatim, no normalization
    pub email: String,
}

/// Sign up output
#[derive(Debug, Clone)]
pub struct SignUpOutput {
    pub message: String,
    pub participant_count: usize,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: ActivityRepository,
{
    repo: Arc<R>,
}

impl<R> SignUpUseCase<R>
where
    R: ActivityRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> ActivityResult<SignUpOutput> {
        let activity = self
            .repo
            .add_participant(&input.activity_name, &input.email)
            .await?;

        if activity.exceeds_capacity() {
            tracing::warn!(
                activity = %activity.name,
                participants = activity.participants.len(),
                max_participants = activity.max_participants,
                "Roster is over capacity"
            );
        }

        tracing::info!(
            activity = %activity.name,
            participants = activity.participants.len(),
            "Student signed up"
        );

        Ok(SignUpOutput {
            message: format!("Signed up {} for {}", input.email, input.activity_name),
            participant_count: activity.participants.len(),
        })
    }
}
