pub mod inventory_service;
pub mod order_service;
