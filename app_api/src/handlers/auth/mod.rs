use actix_web::web;

pub mod login_handler;
pub mod profile_handler;
pub mod register_handler;
pub mod register_handler_dto;

pub fn configure(cfg: &mut web::ServiceConfig) {
    register_handler::configure(cfg);
    login_handler::configure(cfg);
    profile_handler::configure(cfg);
}
