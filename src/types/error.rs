use crate::types::response::ResultEnvelope;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

/// Everything a handler can fail with. Each variant carries its own HTTP
/// status and the user-facing messages rendered into the envelope; the
/// `Db` payload is logged but never shown to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    // caller-fixable
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("email already registered")]
    AlreadyRegistered,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),

    // infra things
    #[error("token issuance failed")]
    TokenIssuance,
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Ordered, human-readable messages for the response envelope. The
    /// Portuguese wording (including the unaccented "Conteudo" on some
    /// paths) matches the messages this API has always returned.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::AlreadyRegistered => vec!["Usuario já cadastrado".to_string()],
            Self::InvalidCredentials => vec!["Usuário ou senha inválidos".to_string()],
            Self::Unauthorized => vec!["Não autorizado".to_string()],
            Self::NotFound(message) => vec![message.clone()],
            Self::TokenIssuance => vec!["Falha interna".to_string()],
            Self::Db(_) => vec!["Falha interna no servidor".to_string()],
            Self::Internal(message) => vec![message.clone()],
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::AlreadyRegistered => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::TokenIssuance | Self::Db(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Db(err) = self {
            log::error!("database error: {err}");
        }
        HttpResponse::build(self.status_code())
            .json(ResultEnvelope::<()>::error(self.messages()))
    }
}
