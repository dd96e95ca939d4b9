use std::io;
use std::sync::Arc;

use dotenvy::dotenv;
use storefront::application::inventory_service::InventoryService;
use storefront::config::InventoryServiceConfig;
use storefront::infrastructure::inventory_repo::DieselInventoryRepository;
use storefront::{build_inventory_server, create_pool, run_migrations, INVENTORY_MIGRATIONS};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = InventoryServiceConfig::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&config.server.database_url).map_err(io::Error::other)?;
    run_migrations(&pool, INVENTORY_MIGRATIONS).map_err(io::Error::other)?;

    let repo = Arc::new(DieselInventoryRepository::new(pool));
    if !config.seed.is_empty() {
        InventoryService::new(repo.clone())
            .seed(config.seed.clone())
            .await
            .map_err(io::Error::other)?;
    }

    log::info!(
        "Starting inventory service at http://{}:{}",
        config.server.host,
        config.server.port
    );

    build_inventory_server(repo, &config.server.host, config.server.port)?.await
}
