use crate::entitys::appointment_entity::AppointmentInfo;
use crate::entitys::client_entity::ClientInfo;
use crate::entitys::diet_plan_entity::DietPlanInfo;
use crate::entitys::measurement_entity::MeasurementInfo;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use common::errors::AppError;
use log::warn;
use std::fmt;
use std::sync::Arc;

/// Emitted by the services after a row has been stored.
#[derive(Debug, Clone)]
pub enum DomainEvent {
    ClientCreated(ClientInfo),
    MeasurementCreated { user_id: i64, measurement: MeasurementInfo },
    DietPlanCreated(DietPlanInfo),
    AppointmentCreated(AppointmentInfo),
}

impl DomainEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::ClientCreated(_) => "client_created",
            DomainEvent::MeasurementCreated { .. } => "measurement_created",
            DomainEvent::DietPlanCreated(_) => "diet_plan_created",
            DomainEvent::AppointmentCreated(_) => "appointment_created",
        }
    }
}

#[async_trait]
pub trait DomainEventListener: Send + Sync {
    fn name(&self) -> &'static str;
    async fn on_event(&self, event: &DomainEvent) -> Result<(), AppError>;
}

/// Post-commit hook. Listener errors are logged and swallowed; the stored row stays.
pub struct EventBus {
    listeners: ArcSwap<Vec<Arc<dyn DomainEventListener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { listeners: ArcSwap::from_pointee(Vec::new()) }
    }

    pub fn subscribe(&self, listener: Arc<dyn DomainEventListener>) {
        self.listeners.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(listener.clone());
            next
        });
    }

    pub async fn publish(&self, event: DomainEvent) {
        let listeners = self.listeners.load_full();
        for listener in listeners.iter() {
            if let Err(e) = listener.on_event(&event).await {
                warn!("listener {} failed on {}: {}", listener.name(), event.name(), e);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus").field("listeners", &self.listeners.load().len()).finish()
    }
}
