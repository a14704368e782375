use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::{DateTime, Utc};
use entity::post::{ActiveModel as PostActive, Entity as Post, Model as PostModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Projection for listings: the post columns the list needs plus the joined
/// category name and author identity.
#[derive(Debug, FromQueryResult)]
pub struct ListPostRow {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub last_update_date: DateTime<Utc>,
    pub category: String,
    pub author_name: String,
    pub author_email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DBPostCreate {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub slug: String,
    pub category_id: i32,
    pub author_id: Uuid,
}

impl PostgresService {
    fn list_select() -> sea_orm::Select<Post> {
        Post::find()
            .select_only()
            .column(entity::post::Column::Id)
            .column(entity::post::Column::Title)
            .column(entity::post::Column::Slug)
            .column(entity::post::Column::LastUpdateDate)
            .column_as(entity::category::Column::Name, "category")
            .column_as(entity::user::Column::Name, "author_name")
            .column_as(entity::user::Column::Email, "author_email")
            .join(JoinType::InnerJoin, entity::post::Relation::Category.def())
            .join(JoinType::InnerJoin, entity::post::Relation::Author.def())
            .order_by_desc(entity::post::Column::LastUpdateDate)
    }

    pub async fn list_posts(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<ListPostRow>, u64), AppError> {
        let paginator = Self::list_select()
            .into_model::<ListPostRow>()
            .paginate(&self.db, page_size.max(1));
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;
        Ok((rows, total))
    }

    pub async fn list_posts_by_category(
        &self,
        category_slug: &str,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<ListPostRow>, u64), AppError> {
        let paginator = Self::list_select()
            .filter(entity::category::Column::Slug.eq(category_slug))
            .into_model::<ListPostRow>()
            .paginate(&self.db, page_size.max(1));
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;
        Ok((rows, total))
    }

    /// Full post with its category and author, or `None` on a missing id.
    /// The foreign keys guarantee both lookups succeed once the post exists.
    pub async fn get_post_detail(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            PostModel,
            entity::category::Model,
            entity::user::Model,
        )>,
        AppError,
    > {
        let Some(post) = Post::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let category = entity::category::Entity::find_by_id(post.category_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound("Post category does not exist".into())
            })?;
        let author = entity::user::Entity::find_by_id(post.author_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Post author does not exist".into()))?;
        Ok(Some((post, category, author)))
    }

    pub async fn create_post(&self, payload: DBPostCreate) -> Result<PostModel, AppError> {
        let now = Utc::now();
        Ok(PostActive {
            title: Set(payload.title),
            summary: Set(payload.summary),
            body: Set(payload.body),
            slug: Set(payload.slug),
            category_id: Set(payload.category_id),
            author_id: Set(payload.author_id),
            create_date: Set(now),
            last_update_date: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }
}
