use crate::biz_service::appointment_service::AppointmentService;
use crate::biz_service::client_service::ClientService;
use crate::biz_service::diet_plan_service::DietPlanService;
use crate::biz_service::measurement_service::MeasurementService;
use crate::entitys::appointment_entity::AppointmentStatus;
use chrono::{DateTime, Utc};
use common::util::date_util::{date_in_range, day_bounds};
use common::{RepoResult, Repository, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    pub active_clients: usize,
    /// active flag set and today inside the plan's date range
    pub active_diet_plans: usize,
    pub today_appointments: usize,
    pub upcoming_appointments: usize,
    pub total_measurements: usize,
}

#[derive(Debug)]
pub struct DashboardService {
    clients: Arc<ClientService>,
    measurements: Arc<MeasurementService>,
    diet_plans: Arc<DietPlanService>,
    appointments: Arc<AppointmentService>,
}

impl DashboardService {
    pub fn new(
        clients: Arc<ClientService>,
        measurements: Arc<MeasurementService>,
        diet_plans: Arc<DietPlanService>,
        appointments: Arc<AppointmentService>,
    ) -> Self {
        Self { clients, measurements, diet_plans, appointments }
    }

    pub async fn stats(&self, user_id: UserId, at: DateTime<Utc>) -> RepoResult<DashboardStats> {
        let clients = self.clients.list_by_user(user_id).await?;
        let client_ids: HashSet<i64> = clients.iter().map(|c| c.id).collect();

        let today = at.date_naive();
        let active_diet_plans = self
            .diet_plans
            .dao
            .count_where(|p| p.user_id == user_id && p.is_active && date_in_range(today, p.start_date, p.end_date))
            .await?;

        let (day_start, day_end) = day_bounds(at);
        let scheduled: Vec<_> = self
            .appointments
            .list_by_user(user_id, None)
            .await?
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .collect();

        let total_measurements = self.measurements.dao.count_where(|m| client_ids.contains(&m.client_id)).await?;

        Ok(DashboardStats {
            total_clients: clients.len(),
            active_clients: clients.iter().filter(|c| c.is_active).count(),
            active_diet_plans,
            today_appointments: scheduled.iter().filter(|a| a.date >= day_start && a.date < day_end).count(),
            upcoming_appointments: scheduled.iter().filter(|a| a.date >= at).count(),
            total_measurements,
        })
    }
}
