use crate::entitys::client_entity::{ClientInfo, ClientPatch, NewClient};
use crate::manager::event_bus::{DomainEvent, EventBus};
use common::util::date_util::now;
use common::{MemoryRepository, RepoResult, Repository, UserId};
use std::sync::Arc;

#[derive(Debug)]
pub struct ClientService {
    pub dao: Arc<MemoryRepository<ClientInfo>>,
    events: Arc<EventBus>,
}

impl ClientService {
    pub fn new(events: Arc<EventBus>) -> Self {
        Self { dao: Arc::new(MemoryRepository::new("client")), events }
    }

    pub async fn create(&self, user_id: UserId, new_client: NewClient) -> RepoResult<ClientInfo> {
        let client = self.dao.insert(new_client.into_client(user_id, now())).await?;
        self.events.publish(DomainEvent::ClientCreated(client.clone())).await;
        Ok(client)
    }

    /// Clients of one dietitian in insertion order.
    pub async fn list_by_user(&self, user_id: UserId) -> RepoResult<Vec<ClientInfo>> {
        self.dao.find_by_owner(user_id).await
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<ClientInfo>> {
        self.dao.find_by_id(id).await
    }

    pub async fn update(&self, id: i64, patch: ClientPatch) -> RepoResult<Option<ClientInfo>> {
        self.dao.update(id, move |client| patch.apply_to(client)).await
    }

    /// Removes only the client row, see `ServiceContext::remove_client` for the cascade.
    pub async fn delete(&self, id: i64) -> RepoResult<Option<ClientInfo>> {
        self.dao.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_client(name: &str) -> NewClient {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    #[tokio::test]
    async fn clients_are_listed_per_owner_in_insertion_order() {
        let service = ClientService::new(Arc::new(EventBus::new()));
        let a = service.create(1, new_client("Ayşe")).await.unwrap();
        service.create(2, new_client("Bora")).await.unwrap();
        let c = service.create(1, new_client("Cem")).await.unwrap();
        assert!(a.is_active);
        assert!(c.id > a.id);

        let mine = service.list_by_user(1).await.unwrap();
        assert_eq!(mine.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["Ayşe", "Cem"]);
    }

    #[tokio::test]
    async fn update_keeps_untouched_fields() {
        let service = ClientService::new(Arc::new(EventBus::new()));
        let mut input = new_client("Deniz");
        input.goal = Some("lose 5 kg".to_string());
        let saved = service.create(1, input).await.unwrap();

        let patch = ClientPatch { is_active: Some(false), ..Default::default() };
        let updated = service.update(saved.id, patch).await.unwrap().unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.goal.as_deref(), Some("lose 5 kg"));
        assert_eq!(updated.user_id, 1);
        assert!(service.update(999, ClientPatch::default()).await.unwrap().is_none());
    }
}
