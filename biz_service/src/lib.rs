use crate::biz_service::activity_service::ActivityService;
use crate::biz_service::appointment_service::AppointmentService;
use crate::biz_service::article_service::ArticleService;
use crate::biz_service::client_service::ClientService;
use crate::biz_service::dashboard_service::DashboardService;
use crate::biz_service::diet_plan_service::DietPlanService;
use crate::biz_service::measurement_service::MeasurementService;
use crate::biz_service::user_service::UserService;
use crate::entitys::client_entity::ClientInfo;
use crate::manager::activity_recorder::ActivityRecorder;
use crate::manager::event_bus::EventBus;
use crate::manager::user_manager_auth::UserManagerAuth;
use common::RepoResult;
use log::info;
use std::sync::Arc;

pub mod biz_service;
pub mod entitys;
pub mod manager;

/// Every service of the process, wired once at startup and handed to the
/// web layer. Tests build a fresh context each.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    pub events: Arc<EventBus>,
    pub user_service: Arc<UserService>,
    pub user_manager_auth: Arc<UserManagerAuth>,
    pub client_service: Arc<ClientService>,
    pub measurement_service: Arc<MeasurementService>,
    pub diet_plan_service: Arc<DietPlanService>,
    pub appointment_service: Arc<AppointmentService>,
    pub activity_service: Arc<ActivityService>,
    pub article_service: Arc<ArticleService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl ServiceContext {
    pub fn new(jwt_secret: &str) -> Self {
        let events = Arc::new(EventBus::new());
        let user_service = Arc::new(UserService::new());
        let user_manager_auth = Arc::new(UserManagerAuth::new(user_service.clone(), jwt_secret));
        let client_service = Arc::new(ClientService::new(events.clone()));
        let measurement_service = Arc::new(MeasurementService::new(client_service.dao.clone(), events.clone()));
        let diet_plan_service = Arc::new(DietPlanService::new(client_service.dao.clone(), events.clone()));
        let appointment_service = Arc::new(AppointmentService::new(client_service.dao.clone(), events.clone()));
        let activity_service = Arc::new(ActivityService::new());
        let article_service = Arc::new(ArticleService::new());
        let dashboard_service = Arc::new(DashboardService::new(
            client_service.clone(),
            measurement_service.clone(),
            diet_plan_service.clone(),
            appointment_service.clone(),
        ));

        events.subscribe(Arc::new(ActivityRecorder::new(client_service.dao.clone(), activity_service.clone())));

        Self {
            events,
            user_service,
            user_manager_auth,
            client_service,
            measurement_service,
            diet_plan_service,
            appointment_service,
            activity_service,
            article_service,
            dashboard_service,
        }
    }

    /// Deletes a client together with its measurements, diet plans and
    /// appointments. Activities stay as history.
    pub async fn remove_client(&self, client_id: i64) -> RepoResult<Option<ClientInfo>> {
        let Some(client) = self.client_service.delete(client_id).await? else {
            return Ok(None);
        };
        let measurements = self.measurement_service.delete_by_client(client_id).await?;
        let plans = self.diet_plan_service.delete_by_client(client_id).await?;
        let appointments = self.appointment_service.delete_by_client(client_id).await?;
        info!(
            "client {} removed with {} measurements, {} diet plans, {} appointments",
            client_id, measurements, plans, appointments
        );
        Ok(Some(client))
    }
}
