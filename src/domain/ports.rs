use async_trait::async_trait;

use super::errors::{DomainError, InventoryLookupError};
use super::inventory::{InventoryRecord, StockStatus};
use super::order::{ListResult, Order, OrderView};

pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order header and all of its line items atomically.
    fn save(&self, order: &Order) -> Result<(), DomainError>;
    fn find_by_order_number(&self, order_number: &str) -> Result<Option<OrderView>, DomainError>;
    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError>;
}

pub trait InventoryRepository: Send + Sync + 'static {
    fn find_by_sku_codes(&self, sku_codes: &[String]) -> Result<Vec<InventoryRecord>, DomainError>;
    fn upsert(&self, record: &InventoryRecord) -> Result<(), DomainError>;
}

/// Stock lookup against the inventory service.
#[async_trait]
pub trait InventoryClient: Send + Sync + 'static {
    async fn lookup_stock(&self, sku_codes: &[String])
        -> Result<Vec<StockStatus>, InventoryLookupError>;
}
