use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::inventory_service::InventoryService;
use crate::domain::inventory::StockStatus;
use crate::errors::AppError;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub sku_code: String,
    pub is_in_stock: bool,
}

impl From<StockStatus> for InventoryResponse {
    fn from(status: StockStatus) -> Self {
        Self {
            sku_code: status.sku_code,
            is_in_stock: status.is_in_stock,
        }
    }
}

/// Collects every `skuCode` value. Comma-separated values are split, so
/// `skuCode=a,b` and `skuCode=a&skuCode=b` are equivalent.
fn sku_codes_from_query(pairs: &[(String, String)]) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key == "skuCode")
        .flat_map(|(_, value)| value.split(','))
        .map(str::trim)
        .filter(|sku| !sku.is_empty())
        .map(str::to_string)
        .collect()
}

/// GET /api/inventory?skuCode=...
///
/// Reports stock for each requested SKU that the inventory knows about.
/// Unknown SKUs are omitted rather than reported as out of stock.
#[utoipa::path(
    get,
    path = "/api/inventory",
    params(
        ("skuCode" = Vec<String>, Query, description = "SKU to check; repeat for several"),
    ),
    responses(
        (status = 200, description = "Stock per known SKU", body = [InventoryResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "inventory"
)]
pub async fn check_stock(
    service: web::Data<InventoryService>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let sku_codes = sku_codes_from_query(&query);

    let statuses = service.check_stock(sku_codes).await?;

    let body: Vec<InventoryResponse> = statuses.into_iter().map(InventoryResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
