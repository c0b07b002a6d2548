use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9 ()-]{7,20}$").expect("phone regex"));

/// Password strength: at least 8 chars with a letter and a digit
pub fn validate_password(pwd: &str) -> Result<(), ValidationError> {
    if pwd.chars().count() < 8 {
        return Err(ValidationError::new("password.too.short").with_message("Password must be at least 8 characters".into()));
    }
    let has_letter = pwd.chars().any(|c| c.is_alphabetic());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    if has_letter && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password.too.weak").with_message("Password must contain letters and digits".into()))
    }
}

/// International phone number, e.g. +90 532 000 00 00
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone.invalid").with_message("Invalid phone number".into()))
    }
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    let len = value.len();
    if !(3..=30).contains(&len) {
        return Err(ValidationError::new("username.length").with_message("Username must be 3-30 characters".into()));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') {
        return Err(ValidationError::new("username.chars").with_message("Username may only contain letters, digits, '_' and '.'".into()));
    }
    Ok(())
}
