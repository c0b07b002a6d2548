use crate::handlers::ownership::owned_client;
use crate::result::{ApiError, AppState};
use actix_web::{HttpResponse, Responder, get, post, web};
use biz_service::entitys::measurement_entity::{MeasurementInfo, NewMeasurement};
use biz_service::manager::user_manager_auth::Principal;
use common::errors::AppError;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(measurement_list);
    cfg.service(measurement_create);
}

#[utoipa::path(
    get,
    path = "/clients/{id}/measurements",
    tag = "Measurements",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Measurements, newest date first", body = Vec<MeasurementInfo>),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[get("/clients/{id}/measurements")]
pub async fn measurement_list(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let client = owned_client(&state, &principal, id.into_inner()).await?;
    let measurements = state.services.measurement_service.list_by_client(client.id).await?;
    Ok(HttpResponse::Ok().json(measurements))
}

/// Record a measurement
///
/// BMI is derived from the client's height when not supplied.
#[utoipa::path(
    post,
    path = "/clients/{id}/measurements",
    tag = "Measurements",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Client id")),
    request_body = NewMeasurement,
    responses(
        (status = 201, description = "Measurement recorded", body = MeasurementInfo),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[post("/clients/{id}/measurements")]
pub async fn measurement_create(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
    dto: web::Json<NewMeasurement>,
) -> Result<impl Responder, AppError> {
    let client = owned_client(&state, &principal, id.into_inner()).await?;
    dto.validate()?;
    let measurement = state.services.measurement_service.create(&client, dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(measurement))
}
