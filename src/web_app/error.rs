// web_app/error.rs - Error type for tracker operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown supplier id: {0}")]
    UnknownSupplier(u32),

    #[error("supplier {supplier_id} has no product at index {index}")]
    UnknownProduct { supplier_id: u32, index: usize },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
