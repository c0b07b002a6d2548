use chrono::{DateTime, Utc};
use common::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Dietitian account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    /// login name, unique
    pub username: String,
    /// Argon2 PHC hash, never the raw password
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub full_name: String,
    /// e.g. "Dyt." / "Uzm. Dyt."
    pub title: Option<String>,
    pub phone: Option<String>,
    /// notification channels
    pub telegram_chat_id: Option<String>,
    pub whatsapp_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for UserInfo {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub whatsapp_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&UserInfo> for UserProfile {
    fn from(user: &UserInfo) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            title: user.title.clone(),
            phone: user.phone.clone(),
            telegram_chat_id: user.telegram_chat_id.clone(),
            whatsapp_number: user.whatsapp_number.clone(),
            created_at: user.created_at,
        }
    }
}

/// Partial profile update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 100, message = "Full name must be 2-100 characters"))]
    pub full_name: Option<String>,
    pub title: Option<String>,
    #[validate(custom(function = "common::util::validate::validate_phone"))]
    pub phone: Option<String>,
    pub telegram_chat_id: Option<String>,
    #[validate(custom(function = "common::util::validate::validate_phone"))]
    pub whatsapp_number: Option<String>,
}

impl ProfilePatch {
    pub fn apply_to(self, user: &mut UserInfo) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if self.title.is_some() {
            user.title = self.title;
        }
        if self.phone.is_some() {
            user.phone = self.phone;
        }
        if self.telegram_chat_id.is_some() {
            user.telegram_chat_id = self.telegram_chat_id;
        }
        if self.whatsapp_number.is_some() {
            user.whatsapp_number = self.whatsapp_number;
        }
    }
}

/// Registration input after request validation; `password` is still raw here.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub title: Option<String>,
    pub phone: Option<String>,
}
