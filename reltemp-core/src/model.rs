use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::compare::ChangeTier;

/// A single Celsius reading.
pub type TemperaturePoint = f64;

/// Paired maximum/minimum temperature, for one day or averaged over several.
///
/// `high >= low` is expected but not enforced; malformed provider data may violate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: f64,
    pub low: f64,
}

impl HighLow {
    pub fn new(high: f64, low: f64) -> Self {
        Self { high, low }
    }

    /// Intraday spread, `high - low`.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// Hourly samples and daily extremes for one location, both chronological with "now" last.
///
/// Built once per fetch and never mutated. The constructor does not validate;
/// the accessors in [`crate::series`] report empty sequences as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSeries {
    hourly: Vec<f64>,
    daily: Vec<HighLow>,
}

impl WeatherSeries {
    pub fn new(hourly: Vec<f64>, daily: Vec<HighLow>) -> Self {
        Self { hourly, daily }
    }

    pub fn hourly(&self) -> &[f64] {
        &self.hourly
    }

    pub fn daily(&self) -> &[HighLow] {
        &self.daily
    }
}

/// Geographic location handed to the weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Tokyo, used whenever the location provider fails.
    pub fn tokyo() -> Self {
        Self::new(35.6762, 139.6503).with_name("Tokyo")
    }
}

/// Whether the report's location came from the provider or from the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Detected,
    Default,
}

/// One row of the "compared with the past" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub period_label: String,
    pub average_temperature: f64,
    pub average_high_low: Option<HighLow>,
    pub change_magnitude: f64,
    pub tier: ChangeTier,
    pub direction_label: String,
}

/// Everything the presentation layer needs for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub location: Location,
    pub location_source: LocationSource,
    pub current_temperature: TemperaturePoint,
    pub today: Option<HighLow>,
    pub comparisons: Vec<ComparisonRecord>,
    pub advice: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_serializes_only_coordinates_and_name() {
        let value = serde_json::to_value(Location::tokyo()).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["latitude", "longitude", "name"]);
    }

    #[test]
    fn high_low_range() {
        assert_eq!(HighLow::new(22.0, 12.5).range(), 9.5);
    }
}
