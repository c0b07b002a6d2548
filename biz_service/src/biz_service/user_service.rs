use crate::entitys::user_entity::{ProfilePatch, UserInfo};
use common::errors::AppError;
use common::{MemoryRepository, RepoResult, Repository};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Reserved while the row is being inserted.
const PENDING: i64 = 0;

#[derive(Debug)]
pub struct UserService {
    pub dao: MemoryRepository<UserInfo>,
    /// lower-cased username -> user id
    usernames: DashMap<String, i64>,
}

impl UserService {
    pub fn new() -> Self {
        Self { dao: MemoryRepository::new("user"), usernames: DashMap::new() }
    }

    fn username_key(username: &str) -> String {
        username.trim().to_lowercase()
    }

    /// Stores a new account; usernames are unique ignoring case.
    pub async fn create(&self, user: UserInfo) -> Result<UserInfo, AppError> {
        let key = Self::username_key(&user.username);
        match self.usernames.entry(key.clone()) {
            Entry::Occupied(_) => return Err(AppError::Conflict("Username already exists".to_string())),
            Entry::Vacant(slot) => {
                slot.insert(PENDING);
            }
        }
        match self.dao.insert(user).await {
            Ok(saved) => {
                self.usernames.insert(key, saved.id);
                Ok(saved)
            }
            Err(e) => {
                self.usernames.remove(&key);
                Err(e)
            }
        }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<UserInfo>> {
        self.dao.find_by_id(id).await
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<UserInfo>> {
        let id = match self.usernames.get(&Self::username_key(username)) {
            Some(id) if *id != PENDING => *id,
            _ => return Ok(None),
        };
        self.dao.find_by_id(id).await
    }

    pub async fn update_profile(&self, id: i64, patch: ProfilePatch) -> RepoResult<Option<UserInfo>> {
        self.dao.update(id, move |user| patch.apply_to(user)).await
    }

    /// `hash` must already be a password hash.
    pub async fn set_password(&self, id: i64, hash: String) -> RepoResult<Option<UserInfo>> {
        self.dao.update(id, move |user| user.password = hash).await
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(username: &str) -> UserInfo {
        UserInfo { username: username.to_string(), created_at: Utc::now(), ..Default::default() }
    }

    #[tokio::test]
    async fn usernames_are_unique_ignoring_case() {
        let service = UserService::new();
        let first = service.create(user("Ayse")).await.unwrap();
        assert!(matches!(service.create(user("ayse")).await, Err(AppError::Conflict(_))));
        let found = service.find_by_username("AYSE").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(service.find_by_username("ali").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn profile_patch_is_a_partial_merge() {
        let service = UserService::new();
        let mut initial = user("can");
        initial.email = "can@example.com".to_string();
        initial.full_name = "Can Yılmaz".to_string();
        let saved = service.create(initial).await.unwrap();

        let patch = ProfilePatch { telegram_chat_id: Some("12345".to_string()), ..Default::default() };
        let updated = service.update_profile(saved.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.email, "can@example.com");
        assert_eq!(updated.full_name, "Can Yılmaz");
        assert_eq!(updated.telegram_chat_id.as_deref(), Some("12345"));
        assert!(service.update_profile(999, ProfilePatch::default()).await.unwrap().is_none());
    }
}
