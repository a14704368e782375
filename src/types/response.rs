use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

/// Uniform wire shape: exactly one of `data` or a non-empty `errors`.
#[derive(Serialize)]
pub struct ResultEnvelope<T> {
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> ResultEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn error(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }
}

pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(ResultEnvelope::ok(v)),
            ApiResponse::Created(v) => HttpResponse::Created().json(ResultEnvelope::ok(v)),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
