use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::InventoryLookupError;
use crate::domain::inventory::StockStatus;
use crate::domain::ports::InventoryClient;

/// Wire shape of one entry returned by `GET /api/inventory`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InventoryResponse {
    sku_code: String,
    is_in_stock: bool,
}

/// Talks to the inventory service over HTTP. Every call is a single attempt
/// bounded by the client timeout.
pub struct HttpInventoryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpInventoryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/api/inventory", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn lookup_stock(
        &self,
        sku_codes: &[String],
    ) -> Result<Vec<StockStatus>, InventoryLookupError> {
        let query: Vec<(&str, &str)> = sku_codes
            .iter()
            .map(|sku| ("skuCode", sku.as_str()))
            .collect();

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| InventoryLookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryLookupError::Status(status.as_u16()));
        }

        // A JSON `null` body is a valid document but carries no answer.
        let body: Option<Vec<InventoryResponse>> = response
            .json()
            .await
            .map_err(|e| InventoryLookupError::Decode(e.to_string()))?;
        let entries = body.ok_or(InventoryLookupError::EmptyResponse)?;

        Ok(entries
            .into_iter()
            .map(|entry| StockStatus {
                sku_code: entry.sku_code,
                is_in_stock: entry.is_in_stock,
            })
            .collect())
    }
}
