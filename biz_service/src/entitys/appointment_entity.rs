use chrono::{DateTime, Utc};
use common::Entity;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;
use validator::Validate;

/// Meeting modality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, Default, Display)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    #[default]
    #[strum(serialize = "In-person")]
    InPerson,
    #[strum(serialize = "Online")]
    Online,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, Default, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInfo {
    pub id: i64,
    pub user_id: i64,
    pub client_id: i64,
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for AppointmentInfo {
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

fn default_duration() -> u32 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub client_id: i64,
    pub date: DateTime<Utc>,
    #[serde(default = "default_duration")]
    #[validate(range(min = 5, max = 480, message = "Duration must be 5-480 minutes"))]
    pub duration_minutes: u32,
    #[serde(default)]
    pub kind: AppointmentType,
    pub notes: Option<String>,
}

impl NewAppointment {
    pub fn into_appointment(self, user_id: i64, created_at: DateTime<Utc>) -> AppointmentInfo {
        AppointmentInfo {
            id: 0,
            user_id,
            client_id: self.client_id,
            date: self.date,
            duration_minutes: self.duration_minutes,
            kind: self.kind,
            status: AppointmentStatus::Scheduled,
            notes: self.notes,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    pub date: Option<DateTime<Utc>>,
    #[validate(range(min = 5, max = 480, message = "Duration must be 5-480 minutes"))]
    pub duration_minutes: Option<u32>,
    pub kind: Option<AppointmentType>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

impl AppointmentPatch {
    pub fn apply_to(self, appointment: &mut AppointmentInfo) {
        if let Some(date) = self.date {
            appointment.date = date;
        }
        if let Some(duration) = self.duration_minutes {
            appointment.duration_minutes = duration;
        }
        if let Some(kind) = self.kind {
            appointment.kind = kind;
        }
        if let Some(status) = self.status {
            appointment.status = status;
        }
        if self.notes.is_some() {
            appointment.notes = self.notes;
        }
    }
}
