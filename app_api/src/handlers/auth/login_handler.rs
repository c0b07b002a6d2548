use crate::handlers::auth::register_handler_dto::LoginRequest;
use crate::result::{ApiError, AppState};
use actix_web::{HttpResponse, Responder, post, web, web::ServiceConfig};
use biz_service::manager::user_manager_auth::{AuthSession, UserManagerAuthOpt};
use common::errors::AppError;
use validator::Validate;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(auth_login);
}

/// Log in with username and password
///
/// Unknown usernames and wrong passwords produce the same 401.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthSession),
        (status = 401, description = "Invalid username or password", body = ApiError),
    ),
    tag = "Auth"
)]
#[post("/auth/login")]
pub async fn auth_login(state: web::Data<AppState>, dto: web::Json<LoginRequest>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    let session = state.services.user_manager_auth.login(&dto.username, &dto.password).await?;
    Ok(HttpResponse::Ok().json(session))
}
