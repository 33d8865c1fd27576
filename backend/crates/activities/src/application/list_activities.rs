//! List Activities Use Case

use std::sync::Arc;

use crate::domain::entities::Activity;
use crate::domain::repository::ActivityRepository;
use crate::error::ActivityResult;

pub struct ListActivitiesUseCase<R>
where
    R: ActivityRepository,
{
    repo: Arc<R>,
}

impl<R> ListActivitiesUseCase<R>
where
    R: ActivityRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every activity with its current roster, in catalog order
    pub async fn execute(&self) -> ActivityResult<Vec<Activity>> {
        self.repo.list().await
    }
}
