use crate::error::ApiError;
use crate::models::requests::{
    DeviceSignalHistoryRequest, LatestSignalsRequest, SignalHistoryRequest,
};
use crate::models::responses::SignalResponse;
use crate::services::signal_service::SignalService;
use actix_web::{Responder, Result, get, post, web};
use log::error;
use serde_json::json;
use std::sync::Arc;

/// Signal file upload endpoint
#[utoipa::path(
    post,
    path = "/api/signals/upload",
    request_body(
        content = String,
        content_type = "text/csv",
        description = "One reading per line: date,deviceId,latitude,longitude,strength"
    ),
    responses(
        (status = 200, description = "Success"),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "API"
)]
#[post("/api/signals/upload")]
pub async fn upload_signals(
    body: web::Bytes,
    service: web::Data<Arc<SignalService>>,
) -> Result<impl Responder> {
    match service.ingest(&body).await {
        Ok(saved) => Ok(web::Json(json!({ "status": "ok", "saved": saved }))),
        Err(e) => {
            error!("Error ingesting signal file: {}", e);
            Err(actix_web::error::ErrorInternalServerError(
                "Failed to read and save signal file",
            ))
        }
    }
}

/// Historic signals endpoint
#[utoipa::path(
    get,
    path = "/api/signals/history",
    params(SignalHistoryRequest),
    responses(
        (status = 200, description = "Success", body = Vec<SignalResponse>),
        (status = 400, description = "Bad Request", body = String),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "API"
)]
#[get("/api/signals/history")]
pub async fn get_signal_history(
    req: web::Query<SignalHistoryRequest>,
    service: web::Data<Arc<SignalService>>,
) -> Result<impl Responder> {
    let req = req.into_inner();

    match service
        .get_signals_by_date(&req.start_date, &req.end_date)
        .await
    {
        Ok(signals) => Ok(web::Json(signals)),
        Err(ApiError::DateParse(raw)) => Err(actix_web::error::ErrorBadRequest(format!(
            "Cannot parse date from string: {raw:?}"
        ))),
        Err(e) => {
            error!("Error fetching signal history: {}", e);
            Err(actix_web::error::ErrorInternalServerError(
                "Failed to fetch signal data",
            ))
        }
    }
}

/// Historic signals for a single device endpoint
#[utoipa::path(
    get,
    path = "/api/signals/history/device",
    params(DeviceSignalHistoryRequest),
    responses(
        (status = 200, description = "Success", body = Vec<SignalResponse>),
        (status = 400, description = "Bad Request", body = String),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "API"
)]
#[get("/api/signals/history/device")]
pub async fn get_device_signal_history(
    req: web::Query<DeviceSignalHistoryRequest>,
    service: web::Data<Arc<SignalService>>,
) -> Result<impl Responder> {
    let req = req.into_inner();

    match service
        .get_signals_by_date_and_device(req.device_id, &req.start_date, &req.end_date)
        .await
    {
        Ok(signals) => Ok(web::Json(signals)),
        Err(ApiError::DateParse(raw)) => Err(actix_web::error::ErrorBadRequest(format!(
            "Cannot parse date from string: {raw:?}"
        ))),
        Err(e) => {
            error!("Error fetching device signal history: {}", e);
            Err(actix_web::error::ErrorInternalServerError(
                "Failed to fetch signal data",
            ))
        }
    }
}

/// Latest signals endpoint
#[utoipa::path(
    get,
    path = "/api/signals/latest",
    params(LatestSignalsRequest),
    responses(
        (status = 200, description = "Success", body = Vec<SignalResponse>),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "API"
)]
#[get("/api/signals/latest")]
pub async fn get_latest_signals(
    req: web::Query<LatestSignalsRequest>,
    service: web::Data<Arc<SignalService>>,
) -> Result<impl Responder> {
    let req = req.into_inner();
    let amount = req.amount.unwrap_or(10);

    match service.get_latest_signals(amount).await {
        Ok(signals) => Ok(web::Json(signals)),
        Err(e) => {
            error!("Error fetching latest signals: {}", e);
            Err(actix_web::error::ErrorInternalServerError(
                "Failed to fetch signal data",
            ))
        }
    }
}
