use chrono::{DateTime, NaiveDate, Utc};
use common::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A dietitian's client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub id: i64,
    /// owning dietitian
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub target_weight_kg: Option<f64>,
    pub goal: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for ClientInfo {
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

/// Create request body; the owner comes from the token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(custom(function = "common::util::validate::validate_phone"))]
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    #[validate(range(min = 50.0, max = 260.0, message = "Height must be 50-260 cm"))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 20.0, max = 400.0, message = "Target weight must be 20-400 kg"))]
    pub target_weight_kg: Option<f64>,
    pub goal: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
}

impl NewClient {
    pub fn into_client(self, user_id: i64, created_at: DateTime<Utc>) -> ClientInfo {
        ClientInfo {
            id: 0,
            user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            gender: self.gender,
            height_cm: self.height_cm,
            target_weight_kg: self.target_weight_kg,
            goal: self.goal,
            medical_conditions: self.medical_conditions,
            allergies: self.allergies,
            notes: self.notes,
            is_active: true,
            created_at,
        }
    }
}

/// Partial update; absent fields keep their value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(custom(function = "common::util::validate::validate_phone"))]
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    #[validate(range(min = 50.0, max = 260.0, message = "Height must be 50-260 cm"))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 20.0, max = 400.0, message = "Target weight must be 20-400 kg"))]
    pub target_weight_kg: Option<f64>,
    pub goal: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

impl ClientPatch {
    pub fn apply_to(self, client: &mut ClientInfo) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if self.email.is_some() {
            client.email = self.email;
        }
        if self.phone.is_some() {
            client.phone = self.phone;
        }
        if self.birth_date.is_some() {
            client.birth_date = self.birth_date;
        }
        if self.gender.is_some() {
            client.gender = self.gender;
        }
        if self.height_cm.is_some() {
            client.height_cm = self.height_cm;
        }
        if self.target_weight_kg.is_some() {
            client.target_weight_kg = self.target_weight_kg;
        }
        if self.goal.is_some() {
            client.goal = self.goal;
        }
        if self.medical_conditions.is_some() {
            client.medical_conditions = self.medical_conditions;
        }
        if self.allergies.is_some() {
            client.allergies = self.allergies;
        }
        if self.notes.is_some() {
            client.notes = self.notes;
        }
        if let Some(active) = self.is_active {
            client.is_active = active;
        }
    }
}
