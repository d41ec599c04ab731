use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api::config::Config;
use api::repository::signal::SqliteSignalRepository;
use api::routes;
use api::services::signal_service::SignalService;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::api_test,
        routes::config::get_config,
        routes::signals::upload_signals,
        routes::signals::get_signal_history,
        routes::signals::get_device_signal_history,
        routes::signals::get_latest_signals
    ),
    components(schemas(
        routes::api::HelloResponse,
        routes::config::ConfigResponse,
        api::models::responses::SignalResponse
    )),
    tags(
        (name = "API", description = "Signal ingestion and query endpoints"),
        (name = "Config", description = "Configuration endpoints")
    ),
    info(
        title = "Signal Viewer API",
        version = "0.1.0",
        description = "Ingests uploaded signal-strength readings and serves range queries over them"
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::load().expect("Failed to load configuration");
    let shared_config = Arc::new(config);
    let server_address = shared_config.server_address();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let pool = api::database::create_pool(&shared_config.database)
        .await
        .expect("Failed to set up database");

    let repository = Arc::new(SqliteSignalRepository::new(pool));
    let service = Arc::new(SignalService::new(
        repository,
        shared_config.ingestion.date_format.clone(),
    ));

    println!("Starting signal viewer API server...");
    println!("API endpoints:");
    println!("  - POST /api/signals/upload");
    println!("  - GET /api/signals/history");
    println!("  - GET /api/signals/history/device");
    println!("  - GET /api/signals/latest");
    println!("  - GET /config - View configuration");
    println!("  - GET /swagger-ui/ - Swagger UI documentation");
    println!("Server address: {}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(shared_config.clone()))
            .app_data(web::Data::new(service.clone()))
            .service(routes::api::api_test)
            .service(routes::config::get_config)
            .service(routes::signals::upload_signals)
            .service(routes::signals::get_signal_history)
            .service(routes::signals::get_device_signal_history)
            .service(routes::signals::get_latest_signals)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_address)?
    .run()
    .await
}
