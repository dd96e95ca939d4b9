use std::io;
use std::sync::Arc;

use dotenvy::dotenv;
use storefront::config::OrderServiceConfig;
use storefront::infrastructure::inventory_client::HttpInventoryClient;
use storefront::infrastructure::order_repo::DieselOrderRepository;
use storefront::{build_order_server, create_pool, run_migrations, ORDER_MIGRATIONS};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = OrderServiceConfig::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&config.server.database_url).map_err(io::Error::other)?;
    run_migrations(&pool, ORDER_MIGRATIONS).map_err(io::Error::other)?;

    let inventory = HttpInventoryClient::new(&config.inventory_url, config.inventory_timeout)
        .map_err(io::Error::other)?;

    log::info!(
        "Starting order service at http://{}:{} (inventory at {}, timeout {:?})",
        config.server.host,
        config.server.port,
        config.inventory_url,
        config.inventory_timeout
    );

    build_order_server(
        Arc::new(DieselOrderRepository::new(pool)),
        Arc::new(inventory),
        &config.server.host,
        config.server.port,
    )?
    .await
}
