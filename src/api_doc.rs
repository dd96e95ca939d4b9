use utoipa::OpenApi;

use crate::handlers::{inventory, orders};

#[derive(OpenApi)]
#[openapi(
    paths(orders::place_order, orders::get_order, orders::list_orders),
    components(schemas(
        orders::OrderRequest,
        orders::OrderLineItemsDto,
        orders::PlaceOrderResponse,
        orders::OrderResponse,
        orders::OrderLineItemResponse,
        orders::ListOrdersResponse,
    )),
    tags((name = "orders", description = "Order placement"))
)]
pub struct OrderApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(inventory::check_stock),
    components(schemas(inventory::InventoryResponse)),
    tags((name = "inventory", description = "Stock lookup"))
)]
pub struct InventoryApiDoc;
