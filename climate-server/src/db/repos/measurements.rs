//! Measurement repository
//!
//! Every query is a filter or aggregate over `measurement`. Numeric
//! columns are cast to REAL so integer and float `tobs` decode alike.

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{
    DailyTemperature, ObservationDate, PrecipitationRow, TemperatureObservation, TemperatureStats,
};

/// Measurement repository
pub struct MeasurementRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MeasurementRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Latest date present in the table.
    ///
    /// Returns `DbError::NoData` when the table is empty.
    pub async fn max_date(&self) -> Result<ObservationDate, DbError> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(self.pool)
            .await?;

        let latest = latest.ok_or(DbError::NoData {
            table: "measurement",
        })?;

        ObservationDate::parse("date", &latest)
            .map_err(|_| DbError::InvalidStoredDate { value: latest })
    }

    /// `(date, prcp)` for every row strictly after `threshold`, unordered.
    pub async fn precipitation_since(
        &self,
        threshold: ObservationDate,
    ) -> Result<Vec<PrecipitationRow>, DbError> {
        let rows: Vec<PrecipitationRow> = sqlx::query_as(
            r#"
            SELECT date, CAST(prcp AS REAL) AS prcp
            FROM measurement
            WHERE date > ?
            "#,
        )
        .bind(threshold.as_key())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// `(date, station, tobs)` for every row strictly after `threshold`, unordered.
    pub async fn observations_since(
        &self,
        threshold: ObservationDate,
    ) -> Result<Vec<TemperatureObservation>, DbError> {
        let rows: Vec<TemperatureObservation> = sqlx::query_as(
            r#"
            SELECT date, station, CAST(tobs AS REAL) AS tobs
            FROM measurement
            WHERE date > ? AND tobs IS NOT NULL
            "#,
        )
        .bind(threshold.as_key())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Min/avg/max tobs over the inclusive window `[start, end]`.
    ///
    /// A reversed or empty window yields all-`None` stats, not an error.
    pub async fn stats_in_range(
        &self,
        start: ObservationDate,
        end: ObservationDate,
    ) -> Result<TemperatureStats, DbError> {
        let stats: TemperatureStats = sqlx::query_as(
            r#"
            SELECT
                CAST(MIN(tobs) AS REAL) AS "min",
                AVG(tobs) AS "average",
                CAST(MAX(tobs) AS REAL) AS "max"
            FROM measurement
            WHERE date >= ? AND date <= ?
            "#,
        )
        .bind(start.as_key())
        .bind(end.as_key())
        .fetch_one(self.pool)
        .await?;

        Ok(stats)
    }

    /// Min/avg/max tobs for every row on or after `start`.
    pub async fn stats_on_or_after(
        &self,
        start: ObservationDate,
    ) -> Result<TemperatureStats, DbError> {
        let stats: TemperatureStats = sqlx::query_as(
            r#"
            SELECT
                CAST(MIN(tobs) AS REAL) AS "min",
                AVG(tobs) AS "average",
                CAST(MAX(tobs) AS REAL) AS "max"
            FROM measurement
            WHERE date >= ?
            "#,
        )
        .bind(start.as_key())
        .fetch_one(self.pool)
        .await?;

        Ok(stats)
    }

    /// One min/avg/max row per date strictly after `start`, ascending by date.
    pub async fn daily_stats_since(
        &self,
        start: ObservationDate,
    ) -> Result<Vec<DailyTemperature>, DbError> {
        let rows: Vec<DailyTemperature> = sqlx::query_as(
            r#"
            SELECT
                date,
                CAST(MIN(tobs) AS REAL) AS "min",
                AVG(tobs) AS "avg",
                CAST(MAX(tobs) AS REAL) AS "max"
            FROM measurement
            WHERE date > ? AND tobs IS NOT NULL
            GROUP BY date
            ORDER BY date
            "#,
        )
        .bind(start.as_key())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{empty_pool, insert_measurement};

    fn date(s: &str) -> ObservationDate {
        ObservationDate::parse("date", s).unwrap()
    }

    async fn three_day_pool() -> SqlitePool {
        let pool = empty_pool().await;
        insert_measurement(&pool, "USC00519397", "2017-01-01", Some(0.1), Some(60.0)).await;
        insert_measurement(&pool, "USC00519397", "2017-01-02", None, Some(65.0)).await;
        insert_measurement(&pool, "USC00519397", "2017-01-03", Some(0.3), Some(70.0)).await;
        pool
    }

    #[tokio::test]
    async fn max_date_on_empty_table_is_no_data() {
        let pool = empty_pool().await;
        let err = MeasurementRepo::new(&pool).max_date().await.unwrap_err();
        assert!(matches!(err, DbError::NoData { table: "measurement" }));
    }

    #[tokio::test]
    async fn max_date_returns_latest() {
        let pool = three_day_pool().await;
        let latest = MeasurementRepo::new(&pool).max_date().await.unwrap();
        assert_eq!(latest, date("2017-01-03"));
    }

    #[tokio::test]
    async fn max_date_rejects_garbage() {
        let pool = empty_pool().await;
        insert_measurement(&pool, "S", "not a date", None, Some(1.0)).await;

        let err = MeasurementRepo::new(&pool).max_date().await.unwrap_err();
        assert!(matches!(err, DbError::InvalidStoredDate { .. }));
    }

    #[tokio::test]
    async fn precipitation_since_is_exclusive() {
        let pool = three_day_pool().await;
        let mut rows = MeasurementRepo::new(&pool)
            .precipitation_since(date("2017-01-01"))
            .await
            .unwrap();
        rows.sort_by(|a, b| a.date.cmp(&b.date));

        assert_eq!(
            rows,
            vec![
                PrecipitationRow { date: "2017-01-02".into(), prcp: None },
                PrecipitationRow { date: "2017-01-03".into(), prcp: Some(0.3) },
            ]
        );
    }

    #[tokio::test]
    async fn observations_since_skips_missing_tobs() {
        let pool = three_day_pool().await;
        insert_measurement(&pool, "USC00513117", "2017-01-03", Some(0.0), None).await;

        let rows = MeasurementRepo::new(&pool)
            .observations_since(date("2017-01-02"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station, "USC00519397");
        assert_eq!(rows[0].tobs, 70.0);
    }

    #[tokio::test]
    async fn stats_in_range_inclusive() {
        let pool = three_day_pool().await;
        let stats = MeasurementRepo::new(&pool)
            .stats_in_range(date("2017-01-01"), date("2017-01-03"))
            .await
            .unwrap();

        assert_eq!(
            stats,
            TemperatureStats {
                min: Some(60.0),
                average: Some(65.0),
                max: Some(70.0),
            }
        );
    }

    #[tokio::test]
    async fn stats_in_range_empty_and_reversed() {
        let pool = three_day_pool().await;
        let repo = MeasurementRepo::new(&pool);

        let outside = repo
            .stats_in_range(date("2017-01-04"), date("2017-01-05"))
            .await
            .unwrap();
        assert!(outside.is_empty());

        let reversed = repo
            .stats_in_range(date("2017-01-03"), date("2017-01-01"))
            .await
            .unwrap();
        assert!(reversed.is_empty());
    }

    #[tokio::test]
    async fn stats_accept_integer_tobs() {
        let pool = empty_pool().await;
        sqlx::query("INSERT INTO measurement (station, date, tobs) VALUES ('S', '2017-05-01', 71)")
            .execute(&pool)
            .await
            .unwrap();

        let stats = MeasurementRepo::new(&pool)
            .stats_on_or_after(date("2017-05-01"))
            .await
            .unwrap();
        assert_eq!(stats.min, Some(71.0));
        assert_eq!(stats.max, Some(71.0));
    }

    #[tokio::test]
    async fn stats_on_or_after_is_open_ended() {
        let pool = three_day_pool().await;
        let stats = MeasurementRepo::new(&pool)
            .stats_on_or_after(date("2017-01-02"))
            .await
            .unwrap();

        assert_eq!(stats.min, Some(65.0));
        assert_eq!(stats.average, Some(67.5));
        assert_eq!(stats.max, Some(70.0));
    }

    #[tokio::test]
    async fn daily_stats_grouped_by_date() {
        let pool = three_day_pool().await;
        insert_measurement(&pool, "USC00513117", "2017-01-03", None, Some(74.0)).await;

        let rows = MeasurementRepo::new(&pool)
            .daily_stats_since(date("2017-01-01"))
            .await
            .unwrap();

        assert_eq!(
            rows,
            vec![
                DailyTemperature {
                    date: "2017-01-02".into(),
                    min: 65.0,
                    avg: 65.0,
                    max: 65.0,
                },
                DailyTemperature {
                    date: "2017-01-03".into(),
                    min: 70.0,
                    avg: 72.0,
                    max: 74.0,
                },
            ]
        );
    }
}
