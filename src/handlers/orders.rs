use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{OrderLineItem, OrderView};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Parses a price from its literal JSON text: either a number (`999.99`) or
/// a decimal string (`"999.99"`). The text never passes through `f64`.
fn parse_price(raw: &RawValue) -> Result<BigDecimal, String> {
    let text = raw.get().trim();
    let literal = if text.starts_with('"') {
        serde_json::from_str::<String>(text)
            .map_err(|e| format!("invalid price {}: {}", text, e))?
    } else {
        text.to_string()
    };
    BigDecimal::from_str(literal.trim()).map_err(|e| format!("invalid price {}: {}", text, e))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemsDto {
    pub sku_code: String,
    #[schema(value_type = String, example = "999.99")]
    pub price: Box<RawValue>,
    pub quantity: i32,
}

impl OrderLineItemsDto {
    fn into_line_item(self) -> Result<OrderLineItem, AppError> {
        let price = parse_price(&self.price).map_err(AppError::Validation)?;
        Ok(OrderLineItem {
            sku_code: self.sku_code,
            price,
            quantity: self.quantity,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_line_items_dto_list: Vec<OrderLineItemsDto>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order_number: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemResponse {
    pub sku_code: String,
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_number: String,
    pub created_at: String,
    pub order_line_items: Vec<OrderLineItemResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        Self {
            order_number: order.order_number,
            created_at: order.created_at.to_rfc3339(),
            order_line_items: order
                .line_items
                .into_iter()
                .map(|item| OrderLineItemResponse {
                    sku_code: item.sku_code,
                    price: item.price.to_string(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListOrdersParams {
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page. Defaults to 20, maximum 100.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub items: Vec<OrderResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/order
///
/// Places an order if the inventory service reports every referenced SKU in
/// stock. The order and its line items are stored in one transaction; a
/// failed or negative stock check stores nothing.
#[utoipa::path(
    post,
    path = "/api/order",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Malformed order request"),
        (status = 409, description = "At least one product is not in stock"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    service: web::Data<OrderService>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let line_items = body
        .into_inner()
        .order_line_items_dto_list
        .into_iter()
        .map(OrderLineItemsDto::into_line_item)
        .collect::<Result<Vec<_>, _>>()?;

    let order_number = service.place_order(line_items).await?;

    Ok(HttpResponse::Created().json(PlaceOrderResponse {
        order_number,
        message: "Order placed successfully".to_string(),
    }))
}

/// GET /api/order/{order_number}
///
/// Returns the order together with its line items, in the order they were
/// placed.
#[utoipa::path(
    get,
    path = "/api/order/{order_number}",
    params(
        ("order_number" = String, Path, description = "Order number returned at placement"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match service.get_order(path.into_inner()).await? {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound),
    }
}

/// GET /api/order
///
/// Returns a paginated list of orders (without their line items).
#[utoipa::path(
    get,
    path = "/api/order",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of orders", body = ListOrdersResponse),
        (status = 400, description = "Page out of range"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<OrderService>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = params.page.max(1);
    let limit = params.limit.clamp(1, 100);

    let result = service.list_orders(page, limit).await?;

    Ok(HttpResponse::Ok().json(ListOrdersResponse {
        items: result.items.into_iter().map(OrderResponse::from).collect(),
        total: result.total,
        page,
        limit,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> Box<RawValue> {
        RawValue::from_string(json.to_string()).unwrap()
    }

    #[test]
    fn number_price_keeps_its_decimal_digits() {
        assert_eq!(
            parse_price(&raw("999.99")).unwrap(),
            BigDecimal::from_str("999.99").unwrap()
        );
    }

    #[test]
    fn number_price_beyond_f64_precision_is_exact() {
        let price = parse_price(&raw("1234567890.123456789")).unwrap();
        assert_eq!(price.to_string(), "1234567890.123456789");
    }

    #[test]
    fn string_price_is_accepted() {
        assert_eq!(
            parse_price(&raw(r#"" 19.90 ""#)).unwrap(),
            BigDecimal::from_str("19.9").unwrap()
        );
    }

    #[test]
    fn non_numeric_price_is_a_validation_error() {
        let dto = OrderLineItemsDto {
            sku_code: "iphone_15".to_string(),
            price: raw(r#""cheap""#),
            quantity: 1,
        };
        assert!(matches!(dto.into_line_item(), Err(AppError::Validation(_))));
    }

    #[test]
    fn boolean_price_is_a_validation_error() {
        assert!(parse_price(&raw("true")).is_err());
    }

    #[test]
    fn request_uses_camel_case_field_names() {
        let request: OrderRequest = serde_json::from_str(
            r#"{"orderLineItemsDtoList":[{"skuCode":"iphone_15","price":999.99,"quantity":1}]}"#,
        )
        .unwrap();

        let items = request.order_line_items_dto_list;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku_code, "iphone_15");
        assert_eq!(items[0].quantity, 1);
    }
}
