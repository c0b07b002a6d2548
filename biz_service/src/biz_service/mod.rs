pub mod activity_service;
pub mod appointment_service;
pub mod article_service;
pub mod client_service;
pub mod dashboard_service;
pub mod diet_plan_service;
pub mod measurement_service;
pub mod user_service;
