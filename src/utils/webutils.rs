use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::types::error::AppError;
use crate::utils::token::{decode_token, Claims};

/// URL-safe slug for a user, derived from the email.
pub fn slug_from_email(email: &str) -> String {
    email.replace('@', "-").replace('.', "-")
}

/// Bearer guard for protected handlers: signature + expiry, nothing else.
pub fn authorize(auth: &BearerAuth) -> Result<Claims, AppError> {
    decode_token(auth.token(), &config().jwt_key).map_err(|_| AppError::Unauthorized)
}
