use crate::handlers::ownership::{owned_client, owned_diet_plan};
use crate::result::{ApiError, AppState, result};
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use biz_service::entitys::diet_plan_entity::{DietPlanInfo, DietPlanPatch, NewDietPlan};
use biz_service::manager::user_manager_auth::Principal;
use common::errors::AppError;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(diet_plan_list);
    cfg.service(diet_plan_create);
    cfg.service(diet_plan_get);
    cfg.service(diet_plan_update);
    cfg.service(diet_plan_delete);
}

#[utoipa::path(
    get,
    path = "/clients/{id}/diet-plans",
    tag = "Diet plans",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Diet plans of the client, oldest first", body = Vec<DietPlanInfo>),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[get("/clients/{id}/diet-plans")]
pub async fn diet_plan_list(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let client = owned_client(&state, &principal, id.into_inner()).await?;
    let plans = state.services.diet_plan_service.list_by_client(client.id).await?;
    Ok(HttpResponse::Ok().json(plans))
}

#[utoipa::path(
    post,
    path = "/clients/{id}/diet-plans",
    tag = "Diet plans",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Client id")),
    request_body = NewDietPlan,
    responses(
        (status = 201, description = "Diet plan created", body = DietPlanInfo),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 403, description = "Client of another user", body = ApiError),
        (status = 404, description = "No such client", body = ApiError)
    )
)]
#[post("/clients/{id}/diet-plans")]
pub async fn diet_plan_create(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
    dto: web::Json<NewDietPlan>,
) -> Result<impl Responder, AppError> {
    let client = owned_client(&state, &principal, id.into_inner()).await?;
    dto.validate()?;
    let plan = state.services.diet_plan_service.create(principal.user_id, client.id, dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(plan))
}

#[utoipa::path(
    get,
    path = "/diet-plans/{id}",
    tag = "Diet plans",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Diet plan id")),
    responses(
        (status = 200, description = "The diet plan", body = DietPlanInfo),
        (status = 403, description = "Plan of another user", body = ApiError),
        (status = 404, description = "No such plan", body = ApiError)
    )
)]
#[get("/diet-plans/{id}")]
pub async fn diet_plan_get(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let plan = owned_diet_plan(&state, &principal, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plan))
}

/// Partially update a diet plan
///
/// `meals`, when present, replaces the whole meal list.
#[utoipa::path(
    put,
    path = "/diet-plans/{id}",
    tag = "Diet plans",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Diet plan id")),
    request_body = DietPlanPatch,
    responses(
        (status = 200, description = "Updated plan", body = DietPlanInfo),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 403, description = "Plan of another user", body = ApiError),
        (status = 404, description = "No such plan", body = ApiError)
    )
)]
#[put("/diet-plans/{id}")]
pub async fn diet_plan_update(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
    dto: web::Json<DietPlanPatch>,
) -> Result<impl Responder, AppError> {
    let plan = owned_diet_plan(&state, &principal, id.into_inner()).await?;
    dto.validate()?;
    dto.check_dates(&plan).map_err(|e| AppError::Validation(e.to_string()))?;
    let updated = state.services.diet_plan_service.update(plan.id, dto.into_inner()).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/diet-plans/{id}",
    tag = "Diet plans",
    security(("bearer" = [])),
    params(("id" = i64, Path, description = "Diet plan id")),
    responses(
        (status = 200, description = "Plan deleted"),
        (status = 403, description = "Plan of another user", body = ApiError),
        (status = 404, description = "No such plan", body = ApiError)
    )
)]
#[delete("/diet-plans/{id}")]
pub async fn diet_plan_delete(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let plan = owned_diet_plan(&state, &principal, id.into_inner()).await?;
    state.services.diet_plan_service.delete(plan.id).await?;
    Ok(HttpResponse::Ok().json(result()))
}
