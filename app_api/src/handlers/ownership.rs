//! Resource lookups that enforce the caller owns what they touch.
//! Missing resources are 404, resources of another dietitian are 403.

use crate::result::AppState;
use biz_service::entitys::appointment_entity::AppointmentInfo;
use biz_service::entitys::client_entity::ClientInfo;
use biz_service::entitys::diet_plan_entity::DietPlanInfo;
use biz_service::manager::user_manager_auth::Principal;
use common::errors::AppError;

fn ensure_owner(owner_id: i64, principal: &Principal) -> Result<(), AppError> {
    if owner_id == principal.user_id { Ok(()) } else { Err(AppError::Forbidden) }
}

pub async fn owned_client(state: &AppState, principal: &Principal, client_id: i64) -> Result<ClientInfo, AppError> {
    let client = state.services.client_service.find_by_id(client_id).await?.ok_or(AppError::NotFound)?;
    ensure_owner(client.user_id, principal)?;
    Ok(client)
}

pub async fn owned_diet_plan(state: &AppState, principal: &Principal, plan_id: i64) -> Result<DietPlanInfo, AppError> {
    let plan = state.services.diet_plan_service.find_by_id(plan_id).await?.ok_or(AppError::NotFound)?;
    ensure_owner(plan.user_id, principal)?;
    Ok(plan)
}

pub async fn owned_appointment(state: &AppState, principal: &Principal, appointment_id: i64) -> Result<AppointmentInfo, AppError> {
    let appointment = state.services.appointment_service.find_by_id(appointment_id).await?.ok_or(AppError::NotFound)?;
    ensure_owner(appointment.user_id, principal)?;
    Ok(appointment)
}
