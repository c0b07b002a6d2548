use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use biz_service::ServiceContext;
use common::config::AppConfig;
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AppState {
    pub services: ServiceContext,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self { services: ServiceContext::new(&config.get_sys().jwt_secret) }
    }
}

/// Fallback for unmatched paths and methods, so they answer with the JSON error body too.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}

/// Error body, documented for OpenAPI
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiError {
    #[schema(example = 404)]
    pub code: u16,
    #[schema(example = "Resource not found")]
    pub message: String,
}

pub fn result() -> Value {
    serde_json::json!({"success":true})
}

/// Malformed JSON bodies become 400 with the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let app_error = AppError::Validation(err.to_string());
        actix_web::error::InternalError::from_response(err, app_error.error_response()).into()
    })
}

/// Same for unparsable query strings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let app_error = AppError::Validation(err.to_string());
        actix_web::error::InternalError::from_response(err, app_error.error_response()).into()
    })
}

/// Same for path segments such as a non-numeric `{id}`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        let app_error = AppError::Validation(err.to_string());
        actix_web::error::InternalError::from_response(err, app_error.error_response()).into()
    })
}
