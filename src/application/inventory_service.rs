use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::inventory::{InventoryRecord, StockStatus};
use crate::domain::ports::InventoryRepository;

pub struct InventoryService {
    repo: Arc<dyn InventoryRepository>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self {
        Self { repo }
    }

    /// Reports availability for every requested SKU that has an inventory
    /// record. SKUs without a record are left out of the result.
    pub async fn check_stock(&self, sku_codes: Vec<String>) -> Result<Vec<StockStatus>, DomainError> {
        let distinct: Vec<String> = sku_codes
            .iter()
            .map(|sku| sku.trim())
            .filter(|sku| !sku.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if distinct.is_empty() {
            return Ok(vec![]);
        }

        let repo = Arc::clone(&self.repo);
        let records = tokio::task::spawn_blocking(move || repo.find_by_sku_codes(&distinct))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))??;
        Ok(records.iter().map(StockStatus::from).collect())
    }

    pub async fn seed(&self, records: Vec<InventoryRecord>) -> Result<(), DomainError> {
        for record in &records {
            if record.quantity < 0 {
                return Err(DomainError::InvalidInput(format!(
                    "quantity for '{}' must not be negative, got {}",
                    record.sku_code, record.quantity
                )));
            }
        }
        let count = records.len();
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || records.iter().try_for_each(|record| repo.upsert(record)))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))??;
        log::info!("Seeded {} inventory record(s)", count);
        Ok(())
    }
}
