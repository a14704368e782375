use crate::types::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RRegister {
    pub name: String,
    pub email: String,
}

impl RRegister {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("O nome é obrigatório".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("O e-mail é obrigatório".to_string());
        } else if !email_shape_ok(&self.email) {
            errors.push("O e-mail é inválido".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

impl RLogin {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.email.trim().is_empty() {
            errors.push("Informe o e-mail".to_string());
        }
        if self.password.is_empty() {
            errors.push("Informe a senha".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// The plaintext password travels in this response once and is never
/// retrievable again.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRes {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRes {
    pub token: String,
}

/// What the persistence layer needs to create a user row.
#[derive(Debug, Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub slug: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

// Just enough shape checking to reject obvious garbage; real delivery
// failures are the mail server's problem, not ours.
fn email_shape_ok(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
