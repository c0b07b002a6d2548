use crate::result::AppState;
use actix_web::{HttpResponse, Responder, get, web};
use biz_service::biz_service::dashboard_service::DashboardStats;
use biz_service::manager::user_manager_auth::Principal;
use common::errors::AppError;
use common::util::date_util;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard_stats);
}

/// Counters for the dashboard landing page, evaluated at the current instant.
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "Dashboard",
    security(("bearer" = [])),
    responses((status = 200, description = "Dashboard counters", body = DashboardStats))
)]
#[get("/dashboard/stats")]
pub async fn dashboard_stats(state: web::Data<AppState>, principal: web::ReqData<Principal>) -> Result<impl Responder, AppError> {
    let stats = state.services.dashboard_service.stats(principal.user_id, date_util::now()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
