pub mod activity_recorder;
pub mod event_bus;
pub mod user_manager_auth;
pub mod user_manager_auth_impl;
