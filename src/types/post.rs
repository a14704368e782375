use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::post::ListPostRow;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    25
}

/// One row of a post listing. `author` is the composed display label,
/// e.g. "Ana (ana@x.com)".
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostItem {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub last_update_date: DateTime<Utc>,
    pub category: String,
    pub author: String,
}

impl From<ListPostRow> for ListPostItem {
    fn from(row: ListPostRow) -> Self {
        ListPostItem {
            id: row.id,
            title: row.title,
            slug: row.slug,
            last_update_date: row.last_update_date,
            category: row.category,
            author: format!("{} ({})", row.author_name, row.author_email),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsRes {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub posts: Vec<ListPostItem>,
}

/// Author as embedded in a post detail. Deliberately not the entity model:
/// the password hash stays out of responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorRes {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub slug: String,
}

impl From<entity::user::Model> for AuthorRes {
    fn from(user: entity::user::Model) -> Self {
        AuthorRes {
            id: user.id,
            name: user.name,
            email: user.email,
            slug: user.slug,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailRes {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub slug: String,
    pub create_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    pub category: entity::category::Model,
    pub author: AuthorRes,
}

impl From<(entity::post::Model, entity::category::Model, entity::user::Model)> for PostDetailRes {
    fn from(
        (post, category, author): (
            entity::post::Model,
            entity::category::Model,
            entity::user::Model,
        ),
    ) -> Self {
        PostDetailRes {
            id: post.id,
            title: post.title,
            summary: post.summary,
            body: post.body,
            slug: post.slug,
            create_date: post.create_date,
            last_update_date: post.last_update_date,
            category,
            author: author.into(),
        }
    }
}
