//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire; the static front-end reads them as-is.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Activity;

/// One entry of GET /activities
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

/// Response for GET /activities: activity name -> details, in catalog order
pub type ActivitiesResponse = IndexMap<String, ActivityResponse>;

pub fn activities_response(activities: Vec<Activity>) -> ActivitiesResponse {
    activities
        .into_iter()
        .map(|activity| (activity.name.clone(), ActivityResponse::from(activity)))
        .collect()
}

/// Query string for sign up / unregister
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

/// Confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
