use crate::handlers::ownership::owned_client;
use crate::result::{ApiError, AppState, result};
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use biz_service::entitys::client_entity::{ClientInfo, ClientPatch, NewClient};
use biz_service::manager::user_manager_auth::Principal;
use common::errors::AppError;
use log::info;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(client_list);
    cfg.service(client_create);
    cfg.service(client_get);
    cfg.service(client_update);
    cfg.service(client_delete);
}

#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    security(("bearer" = [])),
    responses((status = 200, description = "Clients of the caller, oldest first", body = Vec<ClientInfo>))
)]
#[get("/clients")]
pub async fn client_list(state: web::Data<AppState>, principal: web::ReqData<Principal>) -> Result<impl Responder, AppError> {
    let clients = state.services.client_service.list_by_user(principal.user_id).await?;
    Ok(HttpResponse::Ok().json(clients))
}

#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    security(("bearer" = [])),
    request_body = NewClient,
    responses(
        (status = 201, description = "Client created", body = ClientInfo),
        (status = 400, description = "Invalid input", body = ApiError)
    )
)]
#[post("/clients")]
pub async fn client_create(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    dto: web::Json<NewClient>,
) -> Result<impl Responder, AppError> {
    dto.validate()?;
    let client = state.services.client_service.create(principal.user_id, dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(client))
}

#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "Clients",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "The client", body = ClientInfo),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[get("/clients/{id}")]
pub async fn client_get(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let client = owned_client(&state, &principal, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(client))
}

#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "Clients",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Client id")),
    request_body = ClientPatch,
    responses(
        (status = 200, description = "Updated client", body = ClientInfo),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[put("/clients/{id}")]
pub async fn client_update(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
    dto: web::Json<ClientPatch>,
) -> Result<impl Responder, AppError> {
    let client = owned_client(&state, &principal, id.into_inner()).await?;
    dto.validate()?;
    let updated = state.services.client_service.update(client.id, dto.into_inner()).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a client with its measurements, diet plans and appointments
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "Clients",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[delete("/clients/{id}")]
pub async fn client_delete(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let client = owned_client(&state, &principal, id.into_inner()).await?;
    state.services.remove_client(client.id).await?.ok_or(AppError::NotFound)?;
    info!("user {} deleted client {}", principal.user_id, client.id);
    Ok(HttpResponse::Ok().json(result()))
}
