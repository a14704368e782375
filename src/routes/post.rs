use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::{ListPostsRes, PageQuery, PostDetailRes};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

fn read_failure(e: AppError) -> AppError {
    match e {
        AppError::Db(_) => AppError::Internal("Falha interna".to_string()),
        other => other,
    }
}

#[get("/posts")]
async fn list(
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<PageQuery>,
) -> ApiResult<ListPostsRes> {
    let (rows, total) = db
        .list_posts(query.page, query.page_size)
        .await
        .map_err(read_failure)?;

    Ok(ApiResponse::Ok(ListPostsRes {
        total,
        page: query.page,
        page_size: query.page_size,
        posts: rows.into_iter().map(Into::into).collect(),
    }))
}

#[get("/posts/category/{category}")]
async fn list_by_category(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult<ListPostsRes> {
    let (rows, total) = db
        .list_posts_by_category(&path.into_inner(), query.page, query.page_size)
        .await
        .map_err(read_failure)?;

    Ok(ApiResponse::Ok(ListPostsRes {
        total,
        page: query.page,
        page_size: query.page_size,
        posts: rows.into_iter().map(Into::into).collect(),
    }))
}

#[get("/posts/{id}")]
async fn get_by_id(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<PostDetailRes> {
    let detail = db
        .get_post_detail(path.into_inner())
        .await
        .map_err(read_failure)?
        .ok_or_else(|| AppError::NotFound("Conteúdo não encontrado".to_string()))?;

    Ok(ApiResponse::Ok(detail.into()))
}
