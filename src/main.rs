use actix_web::{web, App, HttpServer};
use roster::config::EnvConfig;
use roster::db::sqlite_service::SqliteService;
use roster::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let sqlite_service = Arc::new(
        SqliteService::new(&config.db_url)
            .await
            .expect("Failed to initialize SqliteService"),
    );

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&sqlite_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
