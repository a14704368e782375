use blog_api::config::{EnvConfig, CONFIG};
use blog_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub const TEST_JWT_KEY: &str = "integration-test-signing-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        init_test_config();

        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn init_test_config() {
    let _ = CONFIG.set(EnvConfig {
        port: 8080,
        db_url: "unused-in-tests".to_string(),
        jwt_key: TEST_JWT_KEY.to_string(),
    });
}

// Test data helpers
pub mod test_data {
    use blog_api::types::account::RRegister;
    use blog_api::types::category::RCategoryEditor;

    #[allow(dead_code)]
    pub fn sample_register() -> RRegister {
        RRegister {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_category() -> RCategoryEditor {
        RCategoryEditor {
            name: "Tecnologia".to_string(),
            slug: "tecnologia".to_string(),
        }
    }
}
