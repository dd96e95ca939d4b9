#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use storefront::domain::errors::{DomainError, InventoryLookupError};
use storefront::domain::inventory::{InventoryRecord, StockStatus};
use storefront::domain::order::{ListResult, Order, OrderView};
use storefront::domain::ports::{InventoryClient, InventoryRepository, OrderRepository};

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn saved(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: &Order) -> Result<(), DomainError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    fn find_by_order_number(&self, order_number: &str) -> Result<Option<OrderView>, DomainError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.order_number == order_number)
            .map(|o| OrderView {
                order_number: o.order_number.clone(),
                created_at: Utc::now(),
                line_items: o.line_items.clone(),
            }))
    }

    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        let orders = self.orders.lock().unwrap();
        let items = orders
            .iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .map(|o| OrderView {
                order_number: o.order_number.clone(),
                created_at: Utc::now(),
                line_items: vec![],
            })
            .collect();
        Ok(ListResult {
            items,
            total: orders.len() as i64,
        })
    }
}

#[derive(Default)]
pub struct InMemoryInventoryRepository {
    records: Mutex<HashMap<String, i32>>,
}

impl InMemoryInventoryRepository {
    pub fn with(records: &[(&str, i32)]) -> Self {
        let repo = Self::default();
        for (sku, quantity) in records {
            repo.records.lock().unwrap().insert(sku.to_string(), *quantity);
        }
        repo
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn find_by_sku_codes(&self, sku_codes: &[String]) -> Result<Vec<InventoryRecord>, DomainError> {
        let records = self.records.lock().unwrap();
        Ok(sku_codes
            .iter()
            .filter_map(|sku| {
                records.get(sku).map(|quantity| InventoryRecord {
                    sku_code: sku.clone(),
                    quantity: *quantity,
                })
            })
            .collect())
    }

    fn upsert(&self, record: &InventoryRecord) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.sku_code.clone(), record.quantity);
        Ok(())
    }
}

/// Answers every lookup with a fixed stock table, or fails if `None`.
pub struct StaticInventoryClient {
    stock: Option<Vec<(&'static str, bool)>>,
}

impl StaticInventoryClient {
    pub fn in_stock(stock: Vec<(&'static str, bool)>) -> Self {
        Self { stock: Some(stock) }
    }

    pub fn unreachable() -> Self {
        Self { stock: None }
    }
}

#[async_trait]
impl InventoryClient for StaticInventoryClient {
    async fn lookup_stock(
        &self,
        sku_codes: &[String],
    ) -> Result<Vec<StockStatus>, InventoryLookupError> {
        let stock = self
            .stock
            .as_ref()
            .ok_or_else(|| InventoryLookupError::Transport("connection refused".to_string()))?;
        Ok(stock
            .iter()
            .filter(|(sku, _)| sku_codes.iter().any(|requested| requested == sku))
            .map(|(sku, in_stock)| StockStatus {
                sku_code: sku.to_string(),
                is_in_stock: *in_stock,
            })
            .collect())
    }
}

pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}
