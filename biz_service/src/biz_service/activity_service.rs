use crate::entitys::activity_entity::{ActivityInfo, ActivityType};
use common::util::date_util::now;
use common::{MemoryRepository, RepoResult, Repository, UserId, apply_limit, sort_newest_first};
use log::debug;

#[derive(Debug)]
pub struct ActivityService {
    dao: MemoryRepository<ActivityInfo>,
}

impl ActivityService {
    pub fn new() -> Self {
        Self { dao: MemoryRepository::new("activity") }
    }

    /// Only the activity recorder writes entries.
    pub(crate) async fn record(&self, user_id: UserId, client_id: Option<i64>, kind: ActivityType, description: String) -> RepoResult<ActivityInfo> {
        let activity = ActivityInfo { id: 0, user_id, client_id, kind, description, created_at: now() };
        let activity = self.dao.insert(activity).await?;
        debug!("activity {} recorded for user {}", activity.kind, user_id);
        Ok(activity)
    }

    /// Newest first, truncated to `limit` when positive.
    pub async fn list(&self, user_id: UserId, limit: Option<i64>) -> RepoResult<Vec<ActivityInfo>> {
        let mut rows = self.dao.find_by_owner(user_id).await?;
        sort_newest_first(&mut rows, |a| a.created_at);
        Ok(apply_limit(rows, limit))
    }
}

impl Default for ActivityService {
    fn default() -> Self {
        Self::new()
    }
}
