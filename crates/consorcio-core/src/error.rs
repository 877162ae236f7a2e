use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsorcioError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid term: {term_months} months (term must be between 1 and 1200 months)")]
    InvalidTerm { term_months: u32 },

    #[error("Invalid bid: {bid_amount} (bid amount cannot be negative)")]
    InvalidBid { bid_amount: Decimal },

    #[error("Degenerate installment: installment is zero, cannot reduce term")]
    DegenerateInstallment,

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ConsorcioError {
    fn from(e: serde_json::Error) -> Self {
        ConsorcioError::SerializationError(e.to_string())
    }
}
