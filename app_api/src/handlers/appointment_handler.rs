use crate::handlers::ownership::{owned_appointment, owned_client};
use crate::result::{ApiError, AppState, result};
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use biz_service::entitys::appointment_entity::{AppointmentInfo, AppointmentPatch, NewAppointment};
use biz_service::manager::user_manager_auth::Principal;
use common::errors::AppError;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(appointment_list);
    cfg.service(appointment_create);
    cfg.service(appointment_update);
    cfg.service(appointment_delete);
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentQuery {
    /// only appointments with this client
    pub client_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/appointments",
    tag = "Appointments",
    security(("bearer" = [])),
    params(AppointmentQuery),
    responses(
        (status = 200, description = "Appointments of the caller", body = Vec<AppointmentInfo>),
        (status = 403, description = "Filter names a client of another user", body = ApiError)
    )
)]
#[get("/appointments")]
pub async fn appointment_list(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    query: web::Query<AppointmentQuery>,
) -> Result<impl Responder, AppError> {
    if let Some(client_id) = query.client_id {
        owned_client(&state, &principal, client_id).await?;
    }
    let appointments = state.services.appointment_service.list_by_user(principal.user_id, query.client_id).await?;
    Ok(HttpResponse::Ok().json(appointments))
}

#[utoipa::path(
    post,
    path = "/appointments",
    tag = "Appointments",
    security(("bearer" = [])),
    request_body = NewAppointment,
    responses(
        (status = 201, description = "Appointment scheduled", body = AppointmentInfo),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[post("/appointments")]
pub async fn appointment_create(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    dto: web::Json<NewAppointment>,
) -> Result<impl Responder, AppError> {
    dto.validate()?;
    owned_client(&state, &principal, dto.client_id).await?;
    let appointment = state.services.appointment_service.create(principal.user_id, dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(appointment))
}

#[utoipa::path(
    put,
    path = "/appointments/{id}",
    tag = "Appointments",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Appointment id")),
    request_body = AppointmentPatch,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentInfo),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 403, description = "Appointment of another user", body = ApiError),
        (status = 404, description = "No such appointment", body = ApiError)
    )
)]
#[put("/appointments/{id}")]
pub async fn appointment_update(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
    dto: web::Json<AppointmentPatch>,
) -> Result<impl Responder, AppError> {
    let appointment = owned_appointment(&state, &principal, id.into_inner()).await?;
    dto.validate()?;
    let updated = state
        .services
        .appointment_service
        .update(appointment.id, dto.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "Appointments",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment deleted"),
        (status = 403, description = "Appointment of another user", body = ApiError),
        (status = 404, description = "No such appointment", body = ApiError)
    )
)]
#[delete("/appointments/{id}")]
pub async fn appointment_delete(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let appointment = owned_appointment(&state, &principal, id.into_inner()).await?;
    state.services.appointment_service.delete(appointment.id).await?;
    Ok(HttpResponse::Ok().json(result()))
}
