use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[derive(Debug, Serialize)]
pub struct SignalResponse {
    pub date: i64, // seconds since UNIX epoch
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub strength: i32, // dBm
}
