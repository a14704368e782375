use crate::db::postgres_service::PostgresService;
use crate::types::{account::DBUserCreate, error::AppError};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Registration: create the user row. `AlreadyRegistered` both on the
    /// pre-check and on a raced unique violation, so a duplicate can never
    /// surface as a plain database failure.
    pub async fn insert_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyRegistered);
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let inserted = UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            email: Set(payload.email),
            slug: Set(payload.slug),
            password_hash: Set(payload.password_hash),
            roles: Set(payload.roles),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await;

        let user = match inserted {
            Ok(user) => user,
            Err(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return Err(AppError::AlreadyRegistered);
                }
                return Err(err.into());
            }
        };

        txn.commit().await?;
        Ok(user)
    }
}
