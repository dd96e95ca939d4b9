use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, Order, OrderLineItem, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_line_items, orders};

use super::models::{NewOrderLineItemRow, NewOrderRow, OrderLineItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_line_item(row: OrderLineItemRow) -> OrderLineItem {
    OrderLineItem {
        sku_code: row.sku_code,
        price: row.price,
        quantity: row.quantity,
    }
}

impl OrderRepository for DieselOrderRepository {
    fn save(&self, order: &Order) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order header
            let order_id = Uuid::new_v4();
            diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: order_id,
                    order_number: &order.order_number,
                })
                .execute(conn)?;

            // 2. Insert the line items, keeping their request position
            let new_items: Vec<NewOrderLineItemRow> = order
                .line_items
                .iter()
                .enumerate()
                .map(|(position, item)| NewOrderLineItemRow {
                    id: Uuid::new_v4(),
                    order_id,
                    position: position as i32,
                    sku_code: &item.sku_code,
                    price: item.price.clone(),
                    quantity: item.quantity,
                })
                .collect();
            diesel::insert_into(order_line_items::table)
                .values(&new_items)
                .execute(conn)?;

            Ok(())
        })
    }

    fn find_by_order_number(&self, order_number: &str) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::order_number.eq(order_number))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = OrderLineItemRow::belonging_to(&order)
            .select(OrderLineItemRow::as_select())
            .order(order_line_items::position.asc())
            .load(&mut conn)?;

        Ok(Some(OrderView {
            order_number: order.order_number,
            created_at: order.created_at,
            line_items: items.into_iter().map(to_line_item).collect(),
        }))
    }

    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        let mut conn = self.pool.get()?;

        let offset = page
            .checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(limit))
            .filter(|offset| *offset >= 0)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!("page {} is out of range for limit {}", page, limit))
            })?;
        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = orders::table.count().get_result(conn)?;

            let rows = orders::table
                .select(OrderRow::as_select())
                .order((orders::created_at.desc(), orders::order_number.asc()))
                .limit(limit)
                .offset(offset)
                .load(conn)?;

            Ok(ListResult {
                items: rows
                    .into_iter()
                    .map(|o| OrderView {
                        order_number: o.order_number,
                        created_at: o.created_at,
                        line_items: vec![],
                    })
                    .collect(),
                total,
            })
        })
    }
}
