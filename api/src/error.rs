use thiserror::Error;

/// Closed error set for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ingestion failed")]
    Ingestion,

    #[error("failed to parse date: {0}")]
    DateParse(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
