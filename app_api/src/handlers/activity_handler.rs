use crate::result::AppState;
use actix_web::{HttpResponse, Responder, get, web};
use biz_service::entitys::activity_entity::ActivityInfo;
use biz_service::manager::user_manager_auth::Principal;
use common::errors::AppError;
use serde::Deserialize;
use utoipa::IntoParams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(activity_list);
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// positive values truncate the list, anything else returns everything
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/activities",
    tag = "Activities",
    security(("bearer" = [])),
    params(LimitQuery),
    responses((status = 200, description = "Activity feed, newest first", body = Vec<ActivityInfo>))
)]
#[get("/activities")]
pub async fn activity_list(
    state: web::Data<AppState>,
    principal: web::ReqData<Principal>,
    query: web::Query<LimitQuery>,
) -> Result<impl Responder, AppError> {
    let activities = state.services.activity_service.list(principal.user_id, query.limit).await?;
    Ok(HttpResponse::Ok().json(activities))
}
