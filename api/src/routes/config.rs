use crate::config::SharedConfig;
use actix_web::{Responder, Result, get, web};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    server: crate::config::ServerConfig,
    database: crate::config::DatabaseConfig,
    ingestion: crate::config::IngestionConfig,
}

/// Configuration endpoint
#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "Success", body = ConfigResponse)
    ),
    tag = "Config"
)]
#[get("/config")]
pub async fn get_config(config: web::Data<SharedConfig>) -> Result<impl Responder> {
    let response = ConfigResponse {
        server: config.server.clone(),
        database: config.database.clone(),
        ingestion: config.ingestion.clone(),
    };
    Ok(actix_web::web::Json(response))
}
