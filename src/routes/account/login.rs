use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::account::{LoginRes, RLogin};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::password::verify_password;
use crate::utils::token::generate_token;
use actix_web::{post, web};
use std::sync::Arc;

#[post("/login")]
async fn login(db: web::Data<Arc<PostgresService>>, body: web::Json<RLogin>) -> ApiResult<LoginRes> {
    body.validate()?;

    // Unknown email and wrong password answer identically so the endpoint
    // cannot be used to probe which accounts exist.
    let user = db
        .find_user_by_email(&body.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&user.password_hash, &body.password).unwrap_or(false) {
        return Err(AppError::InvalidCredentials);
    }

    let token = generate_token(&user, &config().jwt_key)?;

    Ok(ApiResponse::Ok(LoginRes { token }))
}
