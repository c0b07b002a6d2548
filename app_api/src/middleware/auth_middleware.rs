use crate::result::AppState;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, ResponseError,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
    web,
};
use biz_service::manager::user_manager_auth::UserManagerAuthOpt;
use common::errors::AppError;
use futures_util::future::{LocalBoxFuture, Ready, ok};
use std::rc::Rc;
use std::task::{Context, Poll};

/// Routes reachable without a bearer token.
pub fn is_public_path(path: &str) -> bool {
    matches!(path, "/auth/login" | "/auth/register" | "/status" | "/openapi.json") || path == "/blog" || path.starts_with("/blog/")
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").or_else(|| value.strip_prefix("bearer "))?.trim();
    if token.is_empty() { None } else { Some(token.to_string()) }
}

/// Authentication Middleware
///
/// Verifies the bearer token and stores the resulting `Principal` in the
/// request extensions for handlers to pick up with `web::ReqData`.
pub struct AuthMiddleware {
    pub state: web::Data<AppState>,
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService { service: Rc::new(service), state: self.state.clone() })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    state: web::Data<AppState>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = Rc::clone(&self.service);
        let state = self.state.clone();

        if is_public_path(req.path()) {
            return Box::pin(async move {
                let res = srv.call(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        Box::pin(async move {
            let Some(token) = bearer_token(&req) else {
                let resp = AppError::Unauthorized("Missing bearer token".to_string()).error_response();
                return Ok(req.into_response(resp).map_into_right_body());
            };
            match state.services.user_manager_auth.authenticate(&token).await {
                Ok(principal) => {
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => Ok(req.into_response(e.error_response()).map_into_right_body()),
            }
        })
    }
}
