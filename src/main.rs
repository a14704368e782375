use actix_web::{web, App, HttpServer};
use blog_api::config::{EnvConfig, CONFIG};
use blog_api::db::postgres_service::PostgresService;
use blog_api::routes::category::{CategoryCache, CATEGORY_CACHE_TTL};
use blog_api::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    CONFIG.set(config.clone()).ok();

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    // One cache shared by every worker, same as the connection pool.
    let categories_cache = web::Data::new(CategoryCache::new(CATEGORY_CACHE_TTL));

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(categories_cache.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
