use crate::entitys::client_entity::ClientInfo;
use crate::entitys::measurement_entity::{MeasurementInfo, NewMeasurement};
use crate::manager::event_bus::{DomainEvent, EventBus};
use common::errors::AppError;
use common::util::common_utils::round1;
use common::util::date_util::now;
use common::{MemoryRepository, RepoResult, Repository, sort_newest_first};
use std::sync::Arc;

#[derive(Debug)]
pub struct MeasurementService {
    pub dao: Arc<MemoryRepository<MeasurementInfo>>,
    clients: Arc<MemoryRepository<ClientInfo>>,
    events: Arc<EventBus>,
}

/// weight / height², height given in cm
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let meters = height_cm / 100.0;
    Some(round1(weight_kg / (meters * meters)))
}

impl MeasurementService {
    pub fn new(clients: Arc<MemoryRepository<ClientInfo>>, events: Arc<EventBus>) -> Self {
        Self { dao: Arc::new(MemoryRepository::new("measurement")), clients, events }
    }

    /// Appends a reading for `client`; BMI is derived from the client's height when not given.
    pub async fn create(&self, client: &ClientInfo, new_measurement: NewMeasurement) -> RepoResult<MeasurementInfo> {
        let mut measurement = new_measurement.into_measurement(client.id, now());
        if measurement.bmi.is_none() {
            measurement.bmi = client.height_cm.and_then(|height| body_mass_index(measurement.weight_kg, height));
        }
        let measurement = self.dao.insert(measurement).await?;
        // a client removed since the caller looked it up takes the new row with it
        if self.clients.find_by_id(client.id).await?.is_none() {
            self.dao.delete(measurement.id).await?;
            return Err(AppError::NotFound);
        }
        self.events
            .publish(DomainEvent::MeasurementCreated { user_id: client.user_id, measurement: measurement.clone() })
            .await;
        Ok(measurement)
    }

    /// Newest reading first.
    pub async fn list_by_client(&self, client_id: i64) -> RepoResult<Vec<MeasurementInfo>> {
        let mut rows = self.dao.find_by_owner(client_id).await?;
        sort_newest_first(&mut rows, |m| m.date);
        Ok(rows)
    }

    pub async fn delete_by_client(&self, client_id: i64) -> RepoResult<u64> {
        self.dao.delete_by_owner(client_id).await
    }
}
