use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single geolocated, timestamped, device-attributed signal-strength
/// reading. `date` is the observation time as seconds since the UNIX epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Signal {
    pub id: String,
    pub date: i64,
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub strength: i32,
}

impl Signal {
    pub fn new(date: i64, device_id: i64, latitude: f64, longitude: f64, strength: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            device_id,
            latitude,
            longitude,
            strength,
        }
    }
}
