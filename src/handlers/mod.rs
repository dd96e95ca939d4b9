pub mod inventory;
pub mod orders;

use actix_web::web;

use crate::errors::AppError;

/// Malformed bodies and query strings surface as `400` with the same
/// `{"error": ...}` shape as every other failure.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
}

pub fn configure_orders(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);
    cfg.service(
        web::scope("/api/order")
            .route("", web::post().to(orders::place_order))
            .route("", web::get().to(orders::list_orders))
            .route("/{order_number}", web::get().to(orders::get_order)),
    );
}

pub fn configure_inventory(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);
    cfg.route("/api/inventory", web::get().to(inventory::check_stock));
}
