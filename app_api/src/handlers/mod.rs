mod activity_handler;
mod appointment_handler;
mod auth;
mod blog_handler;
mod client_handler;
mod common_handler;
mod dashboard_handler;
mod diet_plan_handler;
mod measurement_handler;
mod ownership;
pub mod swagger;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    swagger::configure(cfg);
    common_handler::configure(cfg);
    auth::configure(cfg);
    client_handler::configure(cfg);
    measurement_handler::configure(cfg);
    diet_plan_handler::configure(cfg);
    appointment_handler::configure(cfg);
    activity_handler::configure(cfg);
    blog_handler::configure(cfg);
    dashboard_handler::configure(cfg);
}
