use crate::biz_service::activity_service::ActivityService;
use crate::entitys::activity_entity::ActivityType;
use crate::entitys::client_entity::ClientInfo;
use crate::manager::event_bus::{DomainEvent, DomainEventListener};
use async_trait::async_trait;
use common::errors::AppError;
use common::{MemoryRepository, Repository};
use std::sync::Arc;

pub const UNKNOWN_CLIENT: &str = "Unknown client";

/// Turns creation events into activity feed entries.
#[derive(Debug)]
pub struct ActivityRecorder {
    clients: Arc<MemoryRepository<ClientInfo>>,
    activities: Arc<ActivityService>,
}

impl ActivityRecorder {
    pub fn new(clients: Arc<MemoryRepository<ClientInfo>>, activities: Arc<ActivityService>) -> Self {
        Self { clients, activities }
    }

    /// Falls back to a placeholder when the client cannot be resolved.
    async fn client_name(&self, client_id: i64) -> String {
        match self.clients.find_by_id(client_id).await {
            Ok(Some(client)) => client.name,
            _ => UNKNOWN_CLIENT.to_string(),
        }
    }
}

#[async_trait]
impl DomainEventListener for ActivityRecorder {
    fn name(&self) -> &'static str {
        "activity_recorder"
    }

    async fn on_event(&self, event: &DomainEvent) -> Result<(), AppError> {
        let (user_id, client_id, kind, description) = match event {
            DomainEvent::ClientCreated(client) => {
                (client.user_id, client.id, ActivityType::ClientAdded, format!("New client added: {}", client.name))
            }
            DomainEvent::MeasurementCreated { user_id, measurement } => {
                let name = self.client_name(measurement.client_id).await;
                (*user_id, measurement.client_id, ActivityType::MeasurementAdded, format!("New measurement recorded for {}", name))
            }
            DomainEvent::DietPlanCreated(plan) => {
                let name = self.client_name(plan.client_id).await;
                (plan.user_id, plan.client_id, ActivityType::DietPlanCreated, format!("Diet plan \"{}\" created for {}", plan.name, name))
            }
            DomainEvent::AppointmentCreated(appointment) => {
                let name = self.client_name(appointment.client_id).await;
                let description = format!("{} appointment scheduled with {}", appointment.kind, name);
                (appointment.user_id, appointment.client_id, ActivityType::AppointmentScheduled, description)
            }
        };
        self.activities.record(user_id, Some(client_id), kind, description).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitys::appointment_entity::{AppointmentInfo, AppointmentStatus, AppointmentType};
    use crate::entitys::diet_plan_entity::DietPlanInfo;
    use chrono::{NaiveDate, Utc};

    fn plan(client_id: i64) -> DietPlanInfo {
        DietPlanInfo {
            id: 1,
            user_id: 7,
            client_id,
            name: "Kilo Verme Diyeti".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: None,
            daily_calories: Some(1500),
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            meals: vec![],
            notes: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn dangling_client_degrades_to_placeholder() {
        let clients = Arc::new(MemoryRepository::new("client"));
        let activities = Arc::new(ActivityService::new());
        let recorder = ActivityRecorder::new(clients, activities.clone());

        recorder.on_event(&DomainEvent::DietPlanCreated(plan(404))).await.unwrap();
        let appointment = AppointmentInfo {
            id: 1,
            user_id: 7,
            client_id: 404,
            date: Utc::now(),
            duration_minutes: 45,
            kind: AppointmentType::Online,
            status: AppointmentStatus::Scheduled,
            notes: None,
            created_at: Utc::now(),
        };
        recorder.on_event(&DomainEvent::AppointmentCreated(appointment)).await.unwrap();

        let feed = activities.list(7, None).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].description, "Online appointment scheduled with Unknown client");
        assert_eq!(feed[1].description, "Diet plan \"Kilo Verme Diyeti\" created for Unknown client");
        assert_eq!(feed[1].client_id, Some(404));
    }
}
