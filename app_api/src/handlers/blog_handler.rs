use crate::handlers::activity_handler::LimitQuery;
use crate::result::{ApiError, AppState};
use actix_web::{HttpResponse, Responder, get, web};
use biz_service::entitys::article_entity::ArticleInfo;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blog_list);
    cfg.service(blog_get);
}

#[utoipa::path(
    get,
    path = "/blog",
    tag = "Blog",
    params(LimitQuery),
    responses((status = 200, description = "Articles, newest first", body = Vec<ArticleInfo>))
)]
#[get("/blog")]
pub async fn blog_list(state: web::Data<AppState>, query: web::Query<LimitQuery>) -> Result<impl Responder, AppError> {
    let articles = state.services.article_service.list(query.limit).await?;
    Ok(HttpResponse::Ok().json(articles))
}

#[utoipa::path(
    get,
    path = "/blog/{id}",
    tag = "Blog",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = ArticleInfo),
        (status = 404, description = "No such article", body = ApiError)
    )
)]
#[get("/blog/{id}")]
pub async fn blog_get(state: web::Data<AppState>, id: web::Path<i64>) -> Result<impl Responder, AppError> {
    let article = state.services.article_service.find_by_id(id.into_inner()).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(article))
}
