//! Climate report records and reshaping helpers
//!
//! Repositories hand back raw rows; the helpers here turn them into the
//! shapes the API serves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One `(date, prcp)` row from the measurement table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One temperature observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemperatureObservation {
    pub date: String,
    pub station: String,
    pub tobs: f64,
}

/// Min/avg/max temperature over a date window.
///
/// Every field is `None` when no measurement falls inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub average: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// True when the window matched no rows
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.average.is_none() && self.max.is_none()
    }
}

/// Min/avg/max temperature for a single date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyTemperature {
    pub date: String,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Distinct station names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationList {
    pub stations: Vec<String>,
}

/// Build the date -> precipitation mapping.
///
/// Rows are stably sorted by date, missing precipitation becomes `0.0`, and
/// when a date repeats the last row for it wins.
pub fn precipitation_by_date(mut rows: Vec<PrecipitationRow>) -> BTreeMap<String, f64> {
    rows.sort_by(|a, b| a.date.cmp(&b.date));

    let mut by_date = BTreeMap::new();
    for row in rows {
        by_date.insert(row.date, row.prcp.unwrap_or(0.0));
    }
    by_date
}

/// Stable ascending sort by date.
pub fn sort_observations(mut rows: Vec<TemperatureObservation>) -> Vec<TemperatureObservation> {
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prcp(date: &str, value: Option<f64>) -> PrecipitationRow {
        PrecipitationRow {
            date: date.to_string(),
            prcp: value,
        }
    }

    fn obs(date: &str, station: &str, tobs: f64) -> TemperatureObservation {
        TemperatureObservation {
            date: date.to_string(),
            station: station.to_string(),
            tobs,
        }
    }

    #[test]
    fn precipitation_fills_missing_with_zero() {
        let map = precipitation_by_date(vec![
            prcp("2017-01-02", None),
            prcp("2017-01-01", Some(0.25)),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map["2017-01-01"], 0.25);
        assert_eq!(map["2017-01-02"], 0.0);
    }

    #[test]
    fn precipitation_last_row_wins_per_date() {
        let map = precipitation_by_date(vec![
            prcp("2017-01-01", Some(0.1)),
            prcp("2017-01-02", Some(0.4)),
            prcp("2017-01-01", Some(0.7)),
            prcp("2017-01-01", None),
        ]);

        assert_eq!(map["2017-01-01"], 0.0);
        assert_eq!(map["2017-01-02"], 0.4);
    }

    #[test]
    fn precipitation_keys_are_date_ordered() {
        let map = precipitation_by_date(vec![
            prcp("2017-03-01", Some(1.0)),
            prcp("2016-12-31", Some(2.0)),
            prcp("2017-01-15", Some(3.0)),
        ]);

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["2016-12-31", "2017-01-15", "2017-03-01"]);
    }

    #[test]
    fn observations_sorted_stably() {
        let sorted = sort_observations(vec![
            obs("2017-01-02", "USC1", 70.0),
            obs("2017-01-01", "USC2", 65.0),
            obs("2017-01-02", "USC0", 71.0),
        ]);

        let order: Vec<_> = sorted
            .iter()
            .map(|o| (o.date.as_str(), o.station.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2017-01-01", "USC2"),
                ("2017-01-02", "USC1"),
                ("2017-01-02", "USC0"),
            ]
        );
    }

    #[test]
    fn empty_stats_serialize_as_nulls() {
        let stats = TemperatureStats::default();
        assert!(stats.is_empty());
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({"min": null, "average": null, "max": null})
        );
    }
}
