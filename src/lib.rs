pub mod api_doc;
pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::{InventoryApiDoc, OrderApiDoc};
use crate::application::inventory_service::InventoryService;
use crate::application::order_service::OrderService;
use crate::domain::ports::{InventoryClient, InventoryRepository, OrderRepository};

pub use db::{create_pool, DbPool};

pub const ORDER_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/order");
pub const INVENTORY_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/inventory");

/// Run any pending Diesel migrations from `migrations` against the pool's
/// database.
pub fn run_migrations(
    pool: &DbPool,
    migrations: EmbeddedMigrations,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(migrations)?;
    Ok(())
}

/// Build the order service's actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_order_server(
    repo: Arc<dyn OrderRepository>,
    inventory: Arc<dyn InventoryClient>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(OrderService::new(repo, inventory));
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(handlers::configure_orders)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", OrderApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

/// Build the inventory service's actix-web `Server` bound to `host:port`.
pub fn build_inventory_server(
    repo: Arc<dyn InventoryRepository>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(InventoryService::new(repo));
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(handlers::configure_inventory)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", InventoryApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
