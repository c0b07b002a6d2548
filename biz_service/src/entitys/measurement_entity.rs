use chrono::{DateTime, Utc};
use common::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One body-metric reading; the history is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInfo {
    pub id: i64,
    pub client_id: i64,
    pub date: DateTime<Utc>,
    pub weight_kg: f64,
    pub body_fat_pct: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub chest_cm: Option<f64>,
    pub arm_cm: Option<f64>,
    pub thigh_cm: Option<f64>,
    pub bmi: Option<f64>,
    pub notes: Option<String>,
}

impl Entity for MeasurementInfo {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn owner_id(&self) -> Option<i64> {
        Some(self.client_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMeasurement {
    /// defaults to now
    pub date: Option<DateTime<Utc>>,
    #[validate(range(min = 1.0, max = 500.0, message = "Weight must be 1-500 kg"))]
    pub weight_kg: f64,
    #[validate(range(min = 1.0, max = 80.0, message = "Body fat must be 1-80 %"))]
    pub body_fat_pct: Option<f64>,
    #[validate(range(min = 1.0, max = 200.0))]
    pub muscle_mass_kg: Option<f64>,
    #[validate(range(min = 10.0, max = 300.0))]
    pub waist_cm: Option<f64>,
    #[validate(range(min = 10.0, max = 300.0))]
    pub hip_cm: Option<f64>,
    #[validate(range(min = 10.0, max = 300.0))]
    pub chest_cm: Option<f64>,
    #[validate(range(min = 5.0, max = 100.0))]
    pub arm_cm: Option<f64>,
    #[validate(range(min = 10.0, max = 150.0))]
    pub thigh_cm: Option<f64>,
    #[validate(range(min = 5.0, max = 100.0))]
    pub bmi: Option<f64>,
    pub notes: Option<String>,
}

impl NewMeasurement {
    pub fn into_measurement(self, client_id: i64, now: DateTime<Utc>) -> MeasurementInfo {
        MeasurementInfo {
            id: 0,
            client_id,
            date: self.date.unwrap_or(now),
            weight_kg: self.weight_kg,
            body_fat_pct: self.body_fat_pct,
            muscle_mass_kg: self.muscle_mass_kg,
            waist_cm: self.waist_cm,
            hip_cm: self.hip_cm,
            chest_cm: self.chest_cm,
            arm_cm: self.arm_cm,
            thigh_cm: self.thigh_cm,
            bmi: self.bmi,
            notes: self.notes,
        }
    }
}
