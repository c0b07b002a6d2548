use chrono::{DateTime, Utc};
use common::Entity;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityType {
    ClientAdded,
    MeasurementAdded,
    DietPlanCreated,
    AppointmentScheduled,
}

/// Immutable feed entry, written only by the activity recorder
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInfo {
    pub id: i64,
    pub user_id: i64,
    pub client_id: Option<i64>,
    pub kind: ActivityType,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for ActivityInfo {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn owner_id(&self) -> Option<i64> {
        Some(self.user_id)
    }
}
