//! In-Memory Repository Implementation

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::domain::entities::Activity;
use crate::domain::repository::ActivityRepository;
use crate::error::{ActivityError, ActivityResult};
use crate::infra::seed;

/// Process-lifetime activity table
///
/// One lock guards the whole table. Cloning shares the same table.
#[derive(Clone, Default)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<IndexMap<String, Activity>>>,
}

impl InMemoryActivityRepository {
    /// Build a repository from activities, keyed by name in the given order
    ///
    /// A later activity with an already-seen name replaces the earlier one.
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let table = activities
            .into_iter()
            .map(|activity| (activity.name.clone(), activity))
            .collect::<IndexMap<_, _>>();

        Self {
            activities: Arc::new(RwLock::new(table)),
        }
    }

    /// Repository initialised with the Mergington High School catalog
    pub fn seeded() -> Self {
        let repo = Self::new(seed::mergington_activities());
        tracing::debug!("Activity table seeded");
        repo
    }

    async fn mutate<F>(&self, name: &str, f: F) -> ActivityResult<Activity>
    where
        F: FnOnce(&mut Activity) -> ActivityResult<()>,
    {
        let mut table = self.activities.write().await;
        let activity = table
            .get_mut(name)
            .ok_or(ActivityError::ActivityNotFound)?;
        f(activity)?;
        Ok(activity.clone())
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    async fn list(&self) -> ActivityResult<Vec<Activity>> {
        let table = self.activities.read().await;
        Ok(table.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> ActivityResult<Option<Activity>> {
        let table = self.activities.read().await;
        Ok(table.get(name).cloned())
    }

    async fn add_participant(&self, name: &str, email: &str) -> ActivityResult<Activity> {
        self.mutate(name, |activity| activity.enroll(email)).await
    }

    async fn remove_participant(&self, name: &str, email: &str) -> ActivityResult<Activity> {
        self.mutate(name, |activity| activity.withdraw(email)).await
    }
}
