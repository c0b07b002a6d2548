pub mod activity_entity;
pub mod appointment_entity;
pub mod article_entity;
pub mod client_entity;
pub mod diet_plan_entity;
pub mod measurement_entity;
pub mod user_entity;
