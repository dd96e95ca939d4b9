use diesel::upsert::excluded;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::inventory::InventoryRecord;
use crate::domain::ports::InventoryRepository;
use crate::schema::inventory;

use super::models::{InventoryRow, NewInventoryRow};

pub struct DieselInventoryRepository {
    pool: DbPool,
}

impl DieselInventoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl InventoryRepository for DieselInventoryRepository {
    fn find_by_sku_codes(&self, sku_codes: &[String]) -> Result<Vec<InventoryRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = inventory::table
            .filter(inventory::sku_code.eq_any(sku_codes))
            .select(InventoryRow::as_select())
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|row| InventoryRecord {
                sku_code: row.sku_code,
                quantity: row.quantity,
            })
            .collect())
    }

    fn upsert(&self, record: &InventoryRecord) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(inventory::table)
            .values(&NewInventoryRow {
                sku_code: &record.sku_code,
                quantity: record.quantity,
            })
            .on_conflict(inventory::sku_code)
            .do_update()
            .set((
                inventory::quantity.eq(excluded(inventory::quantity)),
                inventory::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
