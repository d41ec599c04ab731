pub mod signal;

use crate::error::ApiError;
use crate::models::signal::Signal;
use async_trait::async_trait;

/// Storage collaborator for signal records.
#[async_trait]
pub trait SignalRepository: Send + Sync {
    async fn save(&self, signal: &Signal) -> Result<(), ApiError>;

    /// Saves a whole upload in a single transaction. Either every record is
    /// persisted or none is.
    async fn save_batch(&self, signals: &[Signal]) -> Result<(), ApiError>;

    async fn get_by_date_range(&self, start: i64, end: i64) -> Result<Vec<Signal>, ApiError>;

    async fn get_by_date_range_and_device(
        &self,
        device_id: i64,
        start: i64,
        end: i64,
    ) -> Result<Vec<Signal>, ApiError>;

    async fn get_latest(&self, limit: i64) -> Result<Vec<Signal>, ApiError>;
}
