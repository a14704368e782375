use crate::types::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Tokens are good for eight hours from issuance.
pub const TOKEN_TTL_HOURS: i64 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Signed, time-bounded identity assertion for the given user. Never stored;
/// consumers trust it on signature + expiry alone. The only failure mode is
/// a missing signing key, which is a deployment problem, not a request one.
pub fn generate_token(user: &entity::user::Model, key: &str) -> Result<String, AppError> {
    if key.is_empty() {
        return Err(AppError::TokenIssuance);
    }

    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        roles: user.roles.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
    .map_err(|_| AppError::TokenIssuance)
}

pub fn decode_token(token: &str, key: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(key.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
