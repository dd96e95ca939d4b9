#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub sku_code: String,
    pub quantity: i32,
}

/// Availability of a single SKU, computed at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStatus {
    pub sku_code: String,
    pub is_in_stock: bool,
}

impl From<&InventoryRecord> for StockStatus {
    fn from(record: &InventoryRecord) -> Self {
        Self {
            sku_code: record.sku_code.clone(),
            is_in_stock: record.quantity > 0,
        }
    }
}
