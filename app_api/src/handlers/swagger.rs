use crate::handlers::activity_handler::*;
use crate::handlers::appointment_handler::*;
use crate::handlers::auth::login_handler::*;
use crate::handlers::auth::profile_handler::*;
use crate::handlers::auth::register_handler::*;
use crate::handlers::auth::register_handler_dto::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::handlers::blog_handler::*;
use crate::handlers::client_handler::*;
use crate::handlers::common_handler::*;
use crate::handlers::dashboard_handler::*;
use crate::handlers::diet_plan_handler::*;
use crate::handlers::measurement_handler::*;
use crate::result::ApiError;
use actix_web::{HttpResponse, Responder, get, web};
use common::errors::AppError;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        status,

        // auth
        auth_register,
        auth_login,
        auth_me,
        auth_profile,
        auth_password,

        // clients
        client_list,
        client_create,
        client_get,
        client_update,
        client_delete,

        // client records
        measurement_list,
        measurement_create,
        diet_plan_list,
        diet_plan_create,
        diet_plan_get,
        diet_plan_update,
        diet_plan_delete,

        // scheduling
        appointment_list,
        appointment_create,
        appointment_update,
        appointment_delete,

        activity_list,
        dashboard_stats,
        blog_list,
        blog_get,
    ),
    components(schemas(ApiError, RegisterRequest, LoginRequest, ChangePasswordRequest)),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Registration, login and the caller's own account"),
        (name = "Clients", description = "Clients of the logged-in dietitian"),
        (name = "Blog", description = "Public articles")
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[get("/openapi.json")]
async fn openapi_json() -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().content_type("application/json").body(ApiDoc::openapi().to_json()?))
}
