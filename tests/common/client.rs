use actix_web::{web, App};
use blog_api::{
    config::config,
    db::post::DBPostCreate,
    db::postgres_service::PostgresService,
    routes::category::{CategoryCache, CATEGORY_CACHE_TTL},
    types::account::DBUserCreate,
    utils::password::{generate_password, hash_password},
    utils::token::generate_token,
    utils::webutils::slug_from_email,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(CategoryCache::new(CATEGORY_CACHE_TTL)))
            .configure(blog_api::routes::configure_routes)
    }

    /// Creates a user straight through the persistence layer, the same way
    /// registration does, and returns the model plus the plaintext password.
    #[allow(dead_code)]
    pub async fn register_test_user(
        &self,
        email: Option<String>,
    ) -> (entity::user::Model, String) {
        let password = generate_password(25, true, true);
        let password_hash = hash_password(&password).expect("Failed to hash password");
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));

        let user = self
            .db
            .insert_user(DBUserCreate {
                name: "Test User".to_string(),
                email: email.clone(),
                slug: slug_from_email(&email),
                password_hash,
                roles: vec!["user".to_string()],
            })
            .await
            .expect("Failed to create test user");

        (user, password)
    }

    #[allow(dead_code)]
    pub fn bearer_for(&self, user: &entity::user::Model) -> String {
        generate_token(user, &config().jwt_key).expect("Failed to issue test token")
    }

    #[allow(dead_code)]
    pub async fn create_test_category(&self, name: &str, slug: &str) -> entity::category::Model {
        self.db
            .create_category(name.to_string(), slug.to_string())
            .await
            .expect("Failed to create test category")
    }

    #[allow(dead_code)]
    pub async fn create_test_post(
        &self,
        title: &str,
        category_id: i32,
        author_id: Uuid,
    ) -> entity::post::Model {
        self.db
            .create_post(DBPostCreate {
                title: title.to_string(),
                summary: format!("Summary of {}", title),
                body: format!("Body of {}", title),
                slug: title.to_lowercase().replace(' ', "-"),
                category_id,
                author_id,
            })
            .await
            .expect("Failed to create test post")
    }
}
