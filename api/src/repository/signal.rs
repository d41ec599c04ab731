use crate::error::ApiError;
use crate::models::signal::Signal;
use crate::repository::SignalRepository;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteSignalRepository {
    pool: Pool<Sqlite>,
}

impl SqliteSignalRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignalRepository for SqliteSignalRepository {
    async fn save(&self, signal: &Signal) -> Result<(), ApiError> {
        sqlx::query(
            r#"
            INSERT INTO signals (id, date, device_id, latitude, longitude, strength)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&signal.id)
        .bind(signal.date)
        .bind(signal.device_id)
        .bind(signal.latitude)
        .bind(signal.longitude)
        .bind(signal.strength)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_batch(&self, signals: &[Signal]) -> Result<(), ApiError> {
        // One transaction per upload. An early return drops the transaction,
        // rolling back every insert made so far.
        let mut tx = self.pool.begin().await?;

        for signal in signals {
            sqlx::query(
                r#"
                INSERT INTO signals (id, date, device_id, latitude, longitude, strength)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(&signal.id)
            .bind(signal.date)
            .bind(signal.device_id)
            .bind(signal.latitude)
            .bind(signal.longitude)
            .bind(signal.strength)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn get_by_date_range(&self, start: i64, end: i64) -> Result<Vec<Signal>, ApiError> {
        let records = sqlx::query_as::<_, Signal>(
            r#"
            SELECT id, date, device_id, latitude, longitude, strength
            FROM signals
            WHERE date >= ?1 AND date <= ?2
            ORDER BY date DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get_by_date_range_and_device(
        &self,
        device_id: i64,
        start: i64,
        end: i64,
    ) -> Result<Vec<Signal>, ApiError> {
        let records = sqlx::query_as::<_, Signal>(
            r#"
            SELECT id, date, device_id, latitude, longitude, strength
            FROM signals
            WHERE device_id = ?1 AND date >= ?2 AND date <= ?3
            ORDER BY date DESC
            "#,
        )
        .bind(device_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get_latest(&self, limit: i64) -> Result<Vec<Signal>, ApiError> {
        let records = sqlx::query_as::<_, Signal>(
            r#"
            SELECT id, date, device_id, latitude, longitude, strength
            FROM signals
            ORDER BY date DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn repository() -> SqliteSignalRepository {
        // A single connection so every query sees the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");

        SqliteSignalRepository::new(pool)
    }

    #[tokio::test]
    async fn save_then_query_by_date_range() {
        let repository = repository().await;
        for (date, device_id) in [(100, 1), (200, 2), (300, 3)] {
            let signal = Signal::new(date, device_id, 37.7749, -122.4194, -65);
            repository.save(&signal).await.expect("save");
        }

        let records = repository.get_by_date_range(150, 250).await.expect("query");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].device_id, 2);

        let records = repository.get_by_date_range(100, 300).await.expect("query");
        assert_eq!(records.len(), 3);
        // Newest first
        assert_eq!(records[0].date, 300);
        assert_eq!(records[2].date, 100);
    }

    #[tokio::test]
    async fn date_range_bounds_are_inclusive() {
        let repository = repository().await;
        repository
            .save(&Signal::new(100, 1, 0.0, 0.0, -65))
            .await
            .expect("save");

        let records = repository.get_by_date_range(100, 100).await.expect("query");
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn inverted_range_returns_empty() {
        let repository = repository().await;
        repository
            .save(&Signal::new(100, 1, 0.0, 0.0, -65))
            .await
            .expect("save");

        let records = repository.get_by_date_range(300, 100).await.expect("query");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn filters_by_device() {
        let repository = repository().await;
        repository
            .save(&Signal::new(100, 1, 0.0, 0.0, -65))
            .await
            .expect("save");
        repository
            .save(&Signal::new(150, 2, 0.0, 0.0, -70))
            .await
            .expect("save");
        repository
            .save(&Signal::new(200, 1, 0.0, 0.0, -75))
            .await
            .expect("save");

        let records = repository
            .get_by_date_range_and_device(1, 0, 500)
            .await
            .expect("query");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| record.device_id == 1));
    }

    #[tokio::test]
    async fn save_batch_rolls_back_on_constraint_violation() {
        let repository = repository().await;

        let first = Signal::new(100, 1, 0.0, 0.0, -65);
        let mut duplicate = Signal::new(200, 2, 0.0, 0.0, -70);
        duplicate.id = first.id.clone();

        let result = repository.save_batch(&[first, duplicate]).await;
        assert!(result.is_err());

        let records = repository
            .get_by_date_range(i64::MIN, i64::MAX)
            .await
            .expect("query");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn save_batch_persists_every_record() {
        let repository = repository().await;

        let batch = vec![
            Signal::new(100, 1, 0.0, 0.0, -65),
            Signal::new(200, 2, 0.0, 0.0, -70),
        ];
        repository.save_batch(&batch).await.expect("save batch");

        let records = repository.get_by_date_range(0, 500).await.expect("query");
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn latest_returns_newest_first_up_to_limit() {
        let repository = repository().await;
        for date in [100, 300, 200, 500, 400] {
            repository
                .save(&Signal::new(date, 1, 0.0, 0.0, -65))
                .await
                .expect("save");
        }

        let records = repository.get_latest(2).await.expect("query");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, 500);
        assert_eq!(records[1].date, 400);
    }
}
