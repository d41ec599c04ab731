use api::config::DatabaseConfig;
use api::models::signal::Signal;
use api::repository::SignalRepository;
use api::repository::signal::SqliteSignalRepository;
use chrono::{Duration, Utc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let database_url =
        std::env::var("API_DATABASE_URL").unwrap_or_else(|_| "sqlite://data/signals.db?mode=rwc".to_string());

    let pool = api::database::create_pool(&DatabaseConfig {
        url: database_url,
        pool_size: 1,
    })
    .await?;
    let repository = SqliteSignalRepository::new(pool);

    println!("Seeding database with test signal data...");

    // Generate some test data for the last 24 hours
    let now = Utc::now();
    let mut current_time = now - Duration::hours(24);

    for i in 0..100 {
        let signal = Signal::new(
            current_time.timestamp(),
            ((i % 5) + 1) as i64,       // A handful of devices
            37.0 + (i as f64 * 0.01),   // Drifting latitude
            -122.0 - (i as f64 * 0.01), // Drifting longitude
            -110 + (i % 60),            // Varying strength
        );

        repository.save(&signal).await?;

        current_time += Duration::minutes(15); // 15-minute intervals
    }

    println!("Successfully seeded database with 100 signal records!");
    Ok(())
}
