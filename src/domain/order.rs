use std::collections::BTreeSet;

use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub sku_code: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl OrderLineItem {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.sku_code.trim().is_empty() {
            return Err(DomainError::InvalidInput("skuCode must not be blank".to_string()));
        }
        if self.quantity < 1 {
            return Err(DomainError::InvalidInput(format!(
                "quantity for '{}' must be at least 1, got {}",
                self.sku_code, self.quantity
            )));
        }
        if self.price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(format!(
                "price for '{}' must not be negative, got {}",
                self.sku_code, self.price
            )));
        }
        Ok(())
    }
}

/// An order that passed the stock check and is about to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_number: String,
    pub line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Distinct SKUs referenced by the line items, sorted.
    pub fn sku_codes(&self) -> Vec<String> {
        self.line_items
            .iter()
            .map(|item| item.sku_code.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub order_number: String,
    pub created_at: DateTime<Utc>,
    pub line_items: Vec<OrderLineItem>,
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub items: Vec<OrderView>,
    pub total: i64,
}
