use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use entity::category::{ActiveModel as CategoryActive, Entity as Category, Model as CategoryModel};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

impl PostgresService {
    pub async fn list_categories(&self) -> Result<Vec<CategoryModel>, AppError> {
        Ok(Category::find().all(&self.db).await?)
    }

    pub async fn get_category(&self, id: i32) -> Result<Option<CategoryModel>, AppError> {
        Ok(Category::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create_category(
        &self,
        name: String,
        slug: String,
    ) -> Result<CategoryModel, AppError> {
        Ok(CategoryActive {
            name: Set(name),
            slug: Set(slug),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    /// Returns the updated row, or `None` when the id does not exist.
    pub async fn update_category(
        &self,
        id: i32,
        name: String,
        slug: String,
    ) -> Result<Option<CategoryModel>, AppError> {
        let Some(current) = Category::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: CategoryActive = current.into();
        am.name = Set(name);
        am.slug = Set(slug);
        Ok(Some(am.update(&self.db).await?))
    }

    /// Deletes and returns the row, or `None` when the id does not exist.
    pub async fn delete_category(&self, id: i32) -> Result<Option<CategoryModel>, AppError> {
        let Some(current) = Category::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let deleted = current.clone();
        current.delete(&self.db).await?;
        Ok(Some(deleted))
    }
}
