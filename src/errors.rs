use thiserror::Error;
use uuid::Uuid;

/// Error type that captures treasury aggregation failures.
#[derive(Debug, Error)]
pub enum TreasuryError {
    /// A source value cannot be represented as fixed-point cents, or an
    /// integer-cents sum overflowed. Identifies the offending record so the
    /// caller can point at it; partial totals are never returned.
    #[error("invalid amount in {collection} record {id}: {reason}")]
    InvalidAmount {
        collection: &'static str,
        id: Uuid,
        reason: String,
    },
    /// A raw decimal value failed codec validation before it was attached to
    /// any record (non-finite, or beyond the supported magnitude).
    #[error("invalid amount: {reason}")]
    InvalidValue { reason: String },
    /// A record carries a reference month outside 1-12. The repository layer
    /// rejects these at ingestion; this is the defensive double-check.
    #[error("reference month {month} in {collection} record {id} is outside 1-12")]
    PeriodOutOfRange {
        collection: &'static str,
        id: Uuid,
        month: u32,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
