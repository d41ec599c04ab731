use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(ToSchema, IntoParams, Debug, Deserialize)]
#[into_params(style = Form)]
#[serde(rename_all = "camelCase")]
pub struct SignalHistoryRequest {
    #[param(example = "2023-01-15 00:00:00")]
    pub start_date: String,
    #[param(example = "2023-01-15 23:59:59")]
    pub end_date: String,
}

#[derive(ToSchema, IntoParams, Debug, Deserialize)]
#[into_params(style = Form)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSignalHistoryRequest {
    #[param(example = 42)]
    pub device_id: i64,
    #[param(example = "2023-01-15 00:00:00")]
    pub start_date: String,
    #[param(example = "2023-01-15 23:59:59")]
    pub end_date: String,
}

#[derive(ToSchema, IntoParams, Debug, Deserialize)]
#[into_params(style = Form)]
#[serde(rename_all = "camelCase")]
pub struct LatestSignalsRequest {
    #[param(example = 10)]
    pub amount: Option<i64>,
}
