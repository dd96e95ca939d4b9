use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::inventory::StockStatus;
use crate::domain::order::{ListResult, Order, OrderLineItem, OrderView};
use crate::domain::ports::{InventoryClient, OrderRepository};

pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    inventory: Arc<dyn InventoryClient>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>, inventory: Arc<dyn InventoryClient>) -> Self {
        Self { repo, inventory }
    }

    /// Places an order if every referenced SKU is in stock and returns its
    /// order number.
    ///
    /// The inventory service is asked exactly once. A failed or empty lookup
    /// counts as "not in stock", so nothing is persisted unless the check
    /// positively succeeds.
    pub async fn place_order(&self, mut line_items: Vec<OrderLineItem>) -> Result<String, DomainError> {
        if line_items.is_empty() {
            return Err(DomainError::InvalidInput(
                "an order needs at least one line item".to_string(),
            ));
        }
        for item in &mut line_items {
            // Inventory lookups trim SKUs, so stored and checked codes must match.
            item.sku_code = item.sku_code.trim().to_string();
            item.validate()?;
        }

        let order = Order {
            order_number: Uuid::new_v4().to_string(),
            line_items,
        };
        let sku_codes = order.sku_codes();

        if !self.all_in_stock(&sku_codes).await {
            log::info!(
                "Rejected order {}: not all of {:?} in stock",
                order.order_number,
                sku_codes
            );
            return Err(DomainError::ProductUnavailable);
        }

        let order_number = order.order_number.clone();
        let line_count = order.line_items.len();
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || repo.save(&order))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))??;

        log::info!("Placed order {} with {} line item(s)", order_number, line_count);
        Ok(order_number)
    }

    pub async fn get_order(&self, order_number: String) -> Result<Option<OrderView>, DomainError> {
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || repo.find_by_order_number(&order_number))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?
    }

    pub async fn list_orders(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        if page < 1 || limit < 1 {
            return Err(DomainError::InvalidInput(
                "page and limit must be positive".to_string(),
            ));
        }
        if (page - 1).checked_mul(limit).is_none() {
            return Err(DomainError::InvalidInput(format!(
                "page {} is out of range for limit {}",
                page, limit
            )));
        }
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || repo.list(page, limit))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?
    }

    async fn all_in_stock(&self, sku_codes: &[String]) -> bool {
        match self.inventory.lookup_stock(sku_codes).await {
            Ok(statuses) => covers_all_in_stock(sku_codes, &statuses),
            Err(e) => {
                log::warn!(
                    "Stock lookup for {:?} failed, treating as unavailable: {}",
                    sku_codes,
                    e
                );
                false
            }
        }
    }
}

/// Every returned status must be in stock, and every requested SKU must be
/// among them. An unknown SKU is absent from the lookup, never in stock.
fn covers_all_in_stock(requested: &[String], statuses: &[StockStatus]) -> bool {
    statuses.iter().all(|s| s.is_in_stock)
        && requested
            .iter()
            .all(|sku| statuses.iter().any(|s| &s.sku_code == sku))
}
