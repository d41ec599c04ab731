use crate::error::ApiError;
use crate::models::responses::SignalResponse;
use crate::models::signal::Signal;
use crate::repository::SignalRepository;
use chrono::NaiveDateTime;
use log::{debug, error};
use std::sync::Arc;

pub struct SignalService {
    repository: Arc<dyn SignalRepository>,
    date_format: String,
}

impl SignalService {
    pub fn new(repository: Arc<dyn SignalRepository>, date_format: String) -> Self {
        Self {
            repository,
            date_format,
        }
    }

    /// Ingests an uploaded signal file: one reading per line, five
    /// comma-separated fields in the order
    /// `date,deviceId,latitude,longitude,strength`.
    ///
    /// Readings that fail range validation are dropped without failing the
    /// upload. Any parse or storage failure aborts the whole batch and
    /// nothing is persisted. Returns the number of records saved.
    pub async fn ingest(&self, content: &[u8]) -> Result<u64, ApiError> {
        if content.is_empty() {
            return Ok(0);
        }

        let batch = match self.parse_batch(content) {
            Ok(batch) => batch,
            Err(e) => {
                error!("Cannot read uploaded signal file: {}", e);
                return Err(ApiError::Ingestion);
            }
        };

        if let Err(e) = self.repository.save_batch(&batch).await {
            error!("Cannot save uploaded signal file: {}", e);
            return Err(ApiError::Ingestion);
        }

        Ok(batch.len() as u64)
    }

    pub async fn get_signals_by_date(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<SignalResponse>, ApiError> {
        let start = self.parse_date(start_date)?;
        let end = self.parse_date(end_date)?;
        let records = self.repository.get_by_date_range(start, end).await?;

        Ok(records.into_iter().map(to_response).collect())
    }

    pub async fn get_signals_by_date_and_device(
        &self,
        device_id: i64,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<SignalResponse>, ApiError> {
        let start = self.parse_date(start_date)?;
        let end = self.parse_date(end_date)?;
        let records = self
            .repository
            .get_by_date_range_and_device(device_id, start, end)
            .await?;

        Ok(records.into_iter().map(to_response).collect())
    }

    pub async fn get_latest_signals(&self, limit: i64) -> Result<Vec<SignalResponse>, ApiError> {
        let records = self.repository.get_latest(limit).await?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Parses a date string against the configured format into a UNIX
    /// timestamp. The format carries no offset; wall-clock times are read
    /// as UTC.
    pub fn parse_date(&self, raw: &str) -> Result<i64, ApiError> {
        match NaiveDateTime::parse_from_str(raw, &self.date_format) {
            Ok(date) => Ok(date.and_utc().timestamp()),
            Err(e) => {
                error!("Cannot parse date {:?}: {}", raw, e);
                Err(ApiError::DateParse(raw.to_string()))
            }
        }
    }

    fn parse_batch(
        &self,
        content: &[u8],
    ) -> Result<Vec<Signal>, Box<dyn std::error::Error + Send + Sync>> {
        let text = std::str::from_utf8(content)?;
        let mut batch = Vec::new();

        for (index, line) in text.lines().enumerate() {
            match self.parse_line(line) {
                Ok(signal) if is_valid(&signal) => batch.push(signal),
                Ok(signal) => {
                    debug!(
                        "Dropping out-of-range signal on line {}: {:?}",
                        index + 1,
                        signal
                    )
                }
                Err(e) => return Err(format!("line {}: {}", index + 1, e).into()),
            }
        }

        Ok(batch)
    }

    fn parse_line(&self, line: &str) -> Result<Signal, Box<dyn std::error::Error + Send + Sync>> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 5 {
            return Err(format!("expected 5 fields, found {}", fields.len()).into());
        }

        let date = self.parse_date(fields[0].trim())?;
        let device_id = fields[1].trim().parse::<i64>()?;
        let latitude = fields[2].trim().parse::<f64>()?;
        let longitude = fields[3].trim().parse::<f64>()?;
        let strength = fields[4].trim().parse::<i32>()?;

        Ok(Signal::new(date, device_id, latitude, longitude, strength))
    }
}

fn to_response(record: Signal) -> SignalResponse {
    SignalResponse {
        date: record.date,
        device_id: record.device_id,
        latitude: record.latitude,
        longitude: record.longitude,
        strength: record.strength,
    }
}

/// Validate signal. Returns true if every reading is inside its range;
/// bounds are inclusive on both ends.
fn is_valid(signal: &Signal) -> bool {
    if signal.latitude < -90.0 || signal.latitude > 90.0 {
        return false;
    }
    if signal.longitude < -180.0 || signal.longitude > 180.0 {
        return false;
    }
    if signal.strength < -120 || signal.strength > -30 {
        return false;
    }
    true
}
