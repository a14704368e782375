use crate::db::postgres_service::PostgresService;
use crate::types::category::RCategoryEditor;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::cache::TtlCache;
use crate::utils::webutils::authorize;
use actix_web::{delete, get, post, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use std::time::Duration;

pub type CategoryCache = TtlCache<Vec<entity::category::Model>>;

pub const CATEGORY_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Listing is memoized for an hour; writes do not invalidate, the entry
/// simply ages out.
#[get("/categories")]
async fn list(
    db: web::Data<Arc<PostgresService>>,
    cache: web::Data<CategoryCache>,
) -> ApiResult<Vec<entity::category::Model>> {
    if let Some(categories) = cache.get() {
        return Ok(ApiResponse::Ok(categories));
    }

    let categories = db.list_categories().await?;
    cache.put(categories.clone());
    Ok(ApiResponse::Ok(categories))
}

#[get("/categories/{id}")]
async fn get_by_id(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<entity::category::Model> {
    let category = db
        .get_category(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Conteúdo não encontrado".to_string()))?;

    Ok(ApiResponse::Ok(category))
}

#[post("/categories")]
async fn create(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCategoryEditor>,
) -> ApiResult<entity::category::Model> {
    authorize(&auth)?;
    body.validate()?;

    let category = db
        .create_category(body.name.clone(), body.slug.to_lowercase())
        .await
        .map_err(|e| match e {
            AppError::Db(_) => {
                AppError::Internal("Não foi possível inserir a categoria.".to_string())
            }
            other => other,
        })?;

    Ok(ApiResponse::Created(category))
}

#[put("/categories/{id}")]
async fn update(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
    body: web::Json<RCategoryEditor>,
) -> ApiResult<entity::category::Model> {
    authorize(&auth)?;
    body.validate()?;

    let category = db
        .update_category(path.into_inner(), body.name.clone(), body.slug.clone())
        .await
        .map_err(|e| match e {
            AppError::Db(_) => {
                AppError::Internal("Não foi possível atualizar a categoria".to_string())
            }
            other => other,
        })?
        .ok_or_else(|| AppError::NotFound("Conteudo não encontrado".to_string()))?;

    Ok(ApiResponse::Ok(category))
}

#[delete("/categories/{id}")]
async fn delete(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<entity::category::Model> {
    authorize(&auth)?;

    let category = db
        .delete_category(path.into_inner())
        .await
        .map_err(|e| match e {
            AppError::Db(_) => {
                AppError::Internal("Não foi possível excluir a categoria".to_string())
            }
            other => other,
        })?
        .ok_or_else(|| AppError::NotFound("Conteudo não encontrado".to_string()))?;

    Ok(ApiResponse::Ok(category))
}
