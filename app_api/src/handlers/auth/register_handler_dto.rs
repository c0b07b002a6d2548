use biz_service::entitys::user_entity::NewUser;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// 3-30 characters: letters, digits, `_` or `.`
    #[schema(example = "ayse.dyt")]
    #[validate(custom(function = "common::util::validate::validate_username"))]
    pub username: String,

    /// at least 8 characters with a letter and a digit
    #[schema(example = "secret123")]
    #[validate(custom(function = "common::util::validate::validate_password"))]
    pub password: String,

    #[schema(example = "ayse@example.com")]
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[schema(example = "Ayşe Yılmaz")]
    #[validate(length(min = 2, max = 100, message = "Full name must be 2-100 characters"))]
    pub full_name: String,

    #[schema(example = "Dyt.")]
    pub title: Option<String>,

    #[validate(custom(function = "common::util::validate::validate_phone"))]
    pub phone: Option<String>,
}

impl From<RegisterRequest> for NewUser {
    fn from(req: RegisterRequest) -> Self {
        NewUser {
            username: req.username,
            password: req.password,
            email: req.email,
            full_name: req.full_name,
            title: req.title,
            phone: req.phone,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[schema(example = "ayse.dyt")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[schema(example = "secret123")]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(custom(function = "common::util::validate::validate_password"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_rejects_weak_password_and_bad_email() {
        let req = RegisterRequest {
            username: "ayse.dyt".into(),
            password: "password".into(),
            email: "not-an-email".into(),
            full_name: "Ayşe Yılmaz".into(),
            title: None,
            phone: None,
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("username"));
    }

    #[test]
    fn register_request_is_camel_case_on_the_wire() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"ayse.dyt","password":"secret123","email":"a@b.co","fullName":"Ayşe Yılmaz"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.full_name, "Ayşe Yılmaz");
    }
}
