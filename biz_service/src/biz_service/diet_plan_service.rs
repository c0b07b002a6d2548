use crate::entitys::client_entity::ClientInfo;
use crate::entitys::diet_plan_entity::{DietPlanInfo, DietPlanPatch, NewDietPlan};
use crate::manager::event_bus::{DomainEvent, EventBus};
use common::errors::AppError;
use common::util::date_util::now;
use common::{MemoryRepository, RepoResult, Repository, UserId};
use std::sync::Arc;

#[derive(Debug)]
pub struct DietPlanService {
    pub dao: Arc<MemoryRepository<DietPlanInfo>>,
    clients: Arc<MemoryRepository<ClientInfo>>,
    events: Arc<EventBus>,
}

impl DietPlanService {
    pub fn new(clients: Arc<MemoryRepository<ClientInfo>>, events: Arc<EventBus>) -> Self {
        Self { dao: Arc::new(MemoryRepository::new("diet_plan")), clients, events }
    }

    pub async fn create(&self, user_id: UserId, client_id: i64, new_plan: NewDietPlan) -> RepoResult<DietPlanInfo> {
        let plan = self.dao.insert(new_plan.into_plan(user_id, client_id, now())).await?;
        if self.clients.find_by_id(client_id).await?.is_none() {
            self.dao.delete(plan.id).await?;
            return Err(AppError::NotFound);
        }
        self.events.publish(DomainEvent::DietPlanCreated(plan.clone())).await;
        Ok(plan)
    }

    /// Plans of one client in insertion order.
    pub async fn list_by_client(&self, client_id: i64) -> RepoResult<Vec<DietPlanInfo>> {
        self.dao.find_by_owner(client_id).await
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<DietPlanInfo>> {
        self.dao.find_by_id(id).await
    }

    pub async fn update(&self, id: i64, patch: DietPlanPatch) -> RepoResult<Option<DietPlanInfo>> {
        self.dao.update(id, move |plan| patch.apply_to(plan)).await
    }

    pub async fn delete(&self, id: i64) -> RepoResult<Option<DietPlanInfo>> {
        self.dao.delete(id).await
    }

    pub async fn delete_by_client(&self, client_id: i64) -> RepoResult<u64> {
        self.dao.delete_by_owner(client_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitys::client_entity::NewClient;
    use crate::entitys::diet_plan_entity::Meal;

    fn new_plan(name: &str) -> NewDietPlan {
        serde_json::from_value(serde_json::json!({ "name": name, "startDate": "2024-03-01" })).unwrap()
    }

    async fn seeded_client(clients: &MemoryRepository<ClientInfo>) -> i64 {
        let client = serde_json::from_value::<NewClient>(serde_json::json!({ "name": "Ece" })).unwrap().into_client(1, now());
        clients.insert(client).await.unwrap().id
    }

    fn service() -> (DietPlanService, Arc<MemoryRepository<ClientInfo>>) {
        let clients = Arc::new(MemoryRepository::new("client"));
        (DietPlanService::new(clients.clone(), Arc::new(EventBus::new())), clients)
    }

    #[tokio::test]
    async fn plans_are_listed_per_client_in_insertion_order() {
        let (service, clients) = service();
        let (ece, deniz) = (seeded_client(&clients).await, seeded_client(&clients).await);
        let first = service.create(1, ece, new_plan("Detoks")).await.unwrap();
        service.create(1, deniz, new_plan("Başka")).await.unwrap();
        let second = service.create(1, ece, new_plan("Kilo Verme Diyeti")).await.unwrap();
        let ids: Vec<i64> = service.list_by_client(ece).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn patch_replaces_meals_and_keeps_the_rest() {
        let (service, clients) = service();
        let ece = seeded_client(&clients).await;
        let plan = service.create(1, ece, new_plan("Detoks")).await.unwrap();
        let meals = vec![Meal { name: "Kahvaltı".into(), time: None, foods: vec![] }];
        let patch = DietPlanPatch { meals: Some(meals.clone()), ..Default::default() };
        let updated = service.update(plan.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.meals, meals);
        assert_eq!(updated.name, "Detoks");
        assert_eq!(updated.client_id, ece);

        assert_eq!(service.delete_by_client(ece).await.unwrap(), 1);
        assert!(service.find_by_id(plan.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn plan_for_a_missing_client_is_rolled_back() {
        let (service, _) = service();
        let err = service.create(1, 99, new_plan("Detoks")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
        assert!(service.list_by_client(99).await.unwrap().is_empty());
    }
}
