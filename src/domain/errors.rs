use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Product is not in stock, please try again later")]
    ProductUnavailable,
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a stock lookup against the inventory service produced no usable answer.
#[derive(Debug, Error)]
pub enum InventoryLookupError {
    #[error("inventory service unreachable: {0}")]
    Transport(String),
    #[error("inventory service responded with status {0}")]
    Status(u16),
    #[error("inventory response could not be decoded: {0}")]
    Decode(String),
    #[error("inventory service returned an empty response")]
    EmptyResponse,
}
