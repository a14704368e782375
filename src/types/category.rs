use crate::types::error::AppError;
use serde::{Deserialize, Serialize};

/// Editor payload shared by create and update.
#[derive(Debug, Serialize, Deserialize)]
pub struct RCategoryEditor {
    pub name: String,
    pub slug: String,
}

impl RCategoryEditor {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("O nome é obrigatório".to_string());
        } else if self.name.chars().count() < 3 || self.name.chars().count() > 40 {
            errors.push("Este campo deve conter entre 3 e 40 caractéres".to_string());
        }
        if self.slug.trim().is_empty() {
            errors.push("O slug é obrigatório".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_rejects_short_name() {
        let body = RCategoryEditor {
            name: "ab".to_string(),
            slug: "ab".to_string(),
        };
        let err = body.validate().unwrap_err();
        match err {
            AppError::Validation(messages) => assert_eq!(
                messages,
                vec!["Este campo deve conter entre 3 e 40 caractéres".to_string()]
            ),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn editor_requires_slug() {
        let body = RCategoryEditor {
            name: "Tech".to_string(),
            slug: " ".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn editor_accepts_reasonable_input() {
        let body = RCategoryEditor {
            name: "Tech".to_string(),
            slug: "tech".to_string(),
        };
        assert!(body.validate().is_ok());
    }
}
