//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::application::{
    ListActivitiesUseCase, SignUpInput, SignUpUseCase, UnregisterInput, UnregisterUseCase,
};
use crate::domain::repository::ActivityRepository;
use crate::error::ActivityResult;
use crate::presentation::dto::{
    ActivitiesResponse, MessageResponse, ParticipantQuery, activities_response,
};

/// Shared state for activity handlers
#[derive(Clone)]
pub struct ActivityAppState<R>
where
    R: ActivityRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /activities
pub async fn list_activities<R>(
    State(state): State<ActivityAppState<R>>,
) -> ActivityResult<Json<ActivitiesResponse>>
where
    R: ActivityRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListActivitiesUseCase::new(state.repo.clone());
    let activities = use_case.execute().await?;

    Ok(Json(activities_response(activities)))
}

/// POST /activities/{activity_name}/signup?email=...
pub async fn sign_up<R>(
    State(state): State<ActivityAppState<R>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> ActivityResult<Json<MessageResponse>>
where
    R: ActivityRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let output = use_case
        .execute(SignUpInput {
            activity_name,
            email: query.email,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: output.message,
    }))
}

/// DELETE /activities/{activity_name}/unregister?email=...
pub async fn unregister<R>(
    State(state): State<ActivityAppState<R>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> ActivityResult<Json<MessageResponse>>
where
    R: ActivityRepository + Clone + Send + Sync + 'static,
{
    let use_case = UnregisterUseCase::new(state.repo.clone());

    let output = use_case
        .execute(UnregisterInput {
            activity_name,
            email: query.email,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: output.message,
    }))
}
