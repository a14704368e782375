use crate::db::postgres_service::PostgresService;
use crate::types::account::{DBUserCreate, RRegister, RegisterRes};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::password::{generate_password, hash_password};
use crate::utils::webutils::slug_from_email;
use actix_web::{post, web};
use std::sync::Arc;

const GENERATED_PASSWORD_LENGTH: usize = 25;

/// Registration never takes a password; one is generated server side and
/// returned exactly once in the response body.
#[post("/accounts")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRegister>,
) -> ApiResult<RegisterRes> {
    body.validate()?;

    let password = generate_password(GENERATED_PASSWORD_LENGTH, true, true);
    let password_hash = hash_password(&password)
        .map_err(|_| AppError::Internal("Erro ao salvar usuário".to_string()))?;

    let user = db
        .insert_user(DBUserCreate {
            name: body.name.clone(),
            email: body.email.clone(),
            slug: slug_from_email(&body.email),
            password_hash,
            roles: vec!["user".to_string()],
        })
        .await
        .map_err(|e| match e {
            AppError::Db(_) => AppError::Internal("Erro ao salvar usuário".to_string()),
            other => other,
        })?;

    Ok(ApiResponse::Ok(RegisterRes {
        user: user.email,
        password,
    }))
}
