use crate::handlers::auth::register_handler_dto::ChangePasswordRequest;
use crate::result::{ApiError, AppState, result};
use actix_web::{HttpResponse, Responder, get, put, web};
use biz_service::entitys::user_entity::{ProfilePatch, UserProfile};
use biz_service::manager::user_manager_auth::{Principal, UserManagerAuthOpt};
use common::errors::AppError;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth_me);
    cfg.service(auth_profile);
    cfg.service(auth_password);
}

#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 401, description = "Missing or invalid token", body = ApiError)
    )
)]
#[get("/auth/me")]
pub async fn auth_me(state: web::Data<AppState>, principal: web::ReqData<Principal>) -> Result<impl Responder, AppError> {
    let user = state.services.user_service.find_by_id(principal.user_id).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(UserProfile::from(&user)))
}

/// Update contact details and notification channels
#[utoipa::path(
    put,
    path = "/auth/profile",
    tag = "Auth",
    security(("bearer" = [])),
    request_body = ProfilePatch,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Invalid input", body = ApiError)
    )
)]
#[put("/auth/profile")]
pub async fn auth_profile(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    dto: web::Json<ProfilePatch>,
) -> Result<impl Responder, AppError> {
    dto.validate()?;
    let user = state
        .services
        .user_service
        .update_profile(principal.user_id, dto.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(UserProfile::from(&user)))
}

#[utoipa::path(
    put,
    path = "/auth/password",
    tag = "Auth",
    security(("bearer" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Weak new password or wrong current password", body = ApiError)
    )
)]
#[put("/auth/password")]
pub async fn auth_password(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    dto: web::Json<ChangePasswordRequest>,
) -> Result<impl Responder, AppError> {
    dto.validate()?;
    state
        .services
        .user_manager_auth
        .change_password(&principal, &dto.current_password, &dto.new_password)
        .await?;
    Ok(HttpResponse::Ok().json(result()))
}
