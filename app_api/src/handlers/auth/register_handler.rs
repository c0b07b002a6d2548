use crate::handlers::auth::register_handler_dto::RegisterRequest;
use crate::result::{ApiError, AppState};
use actix_web::web::ServiceConfig;
use actix_web::{HttpResponse, Responder, post, web};
use biz_service::manager::user_manager_auth::{AuthSession, UserManagerAuthOpt};
use common::errors::AppError;
use log::info;
use validator::Validate;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(auth_register);
}

/// Register a dietitian account
///
/// Returns a signed token right away so the client is logged in.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthSession),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 409, description = "Username already taken", body = ApiError)
    )
)]
#[post("/auth/register")]
pub async fn auth_register(state: web::Data<AppState>, dto: web::Json<RegisterRequest>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    let session = state.services.user_manager_auth.register(dto.into_inner().into()).await?;
    info!("registered user {} ({})", session.user.username, session.user.id);
    Ok(HttpResponse::Created().json(session))
}
