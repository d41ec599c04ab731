use crate::config::DatabaseConfig;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;

pub async fn create_pool(config: &DatabaseConfig) -> Result<Pool<Sqlite>, sqlx::Error> {
    // Create the data directory for file-backed databases if it doesn't exist
    let path = config.url.trim_start_matches("sqlite://");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(dir) = Path::new(path).parent() {
        std::fs::create_dir_all(dir).ok();
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.pool_size)
        .connect(&config.url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
