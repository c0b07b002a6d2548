use crate::entitys::appointment_entity::{AppointmentInfo, AppointmentPatch, NewAppointment};
use crate::entitys::client_entity::ClientInfo;
use crate::manager::event_bus::{DomainEvent, EventBus};
use common::errors::AppError;
use common::util::date_util::now;
use common::{MemoryRepository, RepoResult, Repository, UserId};
use std::sync::Arc;

#[derive(Debug)]
pub struct AppointmentService {
    pub dao: Arc<MemoryRepository<AppointmentInfo>>,
    clients: Arc<MemoryRepository<ClientInfo>>,
    events: Arc<EventBus>,
}

impl AppointmentService {
    pub fn new(clients: Arc<MemoryRepository<ClientInfo>>, events: Arc<EventBus>) -> Self {
        Self { dao: Arc::new(MemoryRepository::new("appointment")), clients, events }
    }

    /// The caller has already checked that the client belongs to `user_id`.
    pub async fn create(&self, user_id: UserId, new_appointment: NewAppointment) -> RepoResult<AppointmentInfo> {
        let appointment = self.dao.insert(new_appointment.into_appointment(user_id, now())).await?;
        if self.clients.find_by_id(appointment.client_id).await?.is_none() {
            self.dao.delete(appointment.id).await?;
            return Err(AppError::NotFound);
        }
        self.events.publish(DomainEvent::AppointmentCreated(appointment.clone())).await;
        Ok(appointment)
    }

    /// Appointments of one dietitian in insertion order, optionally for one client.
    pub async fn list_by_user(&self, user_id: UserId, client_id: Option<i64>) -> RepoResult<Vec<AppointmentInfo>> {
        let mut rows = self.dao.find_by_owner(user_id).await?;
        if let Some(client_id) = client_id {
            rows.retain(|a| a.client_id == client_id);
        }
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<AppointmentInfo>> {
        self.dao.find_by_id(id).await
    }

    pub async fn update(&self, id: i64, patch: AppointmentPatch) -> RepoResult<Option<AppointmentInfo>> {
        self.dao.update(id, move |appointment| patch.apply_to(appointment)).await
    }

    pub async fn delete(&self, id: i64) -> RepoResult<Option<AppointmentInfo>> {
        self.dao.delete(id).await
    }

    pub async fn delete_by_client(&self, client_id: i64) -> RepoResult<u64> {
        let mut removed = 0;
        for appointment in self.dao.find_where(|a| a.client_id == client_id).await? {
            if self.dao.delete(appointment.id).await?.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
