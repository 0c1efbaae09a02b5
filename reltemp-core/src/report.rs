//! Sequences location → fetch → derivation and assembles a [`Report`].

use anyhow::{Context, Result};
use chrono::Utc;
use std::time::Duration;

use crate::{
    advice::{self, clothing_advice},
    aggregate::{average_daily_high_low, average_hourly},
    compare::{classify_change, relative_change},
    error::CoreError,
    location::{LocationProvider, resolve_location},
    model::{ComparisonRecord, Location, LocationSource, Report, WeatherSeries},
    provider::WeatherProvider,
    series::{latest_daily_high_low, latest_hourly},
};

/// Days of history the clothing advice compares today against.
pub const ADVICE_REFERENCE_DAYS: usize = 3;

/// A trailing window to compare "now" against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonPeriod {
    pub window_hours: usize,
    pub window_days: Option<usize>,
    pub label: &'static str,
}

impl ComparisonPeriod {
    pub const STANDARD: [ComparisonPeriod; 3] = [
        ComparisonPeriod {
            window_hours: 24,
            window_days: Some(1),
            label: "yesterday",
        },
        ComparisonPeriod {
            window_hours: 72,
            window_days: Some(3),
            label: "3 days ago",
        },
        ComparisonPeriod {
            window_hours: 168,
            window_days: Some(7),
            label: "1 week ago",
        },
    ];
}

/// Derive a report from a fetched series.
///
/// Pure and uncached: calling it twice on the same series yields the same report
/// apart from `fetched_at`. An empty daily sequence leaves `today` unset and the
/// advice at its default; an empty hourly sequence or an empty window is an error.
pub fn build_report(
    series: &WeatherSeries,
    location: Location,
    location_source: LocationSource,
) -> Result<Report, CoreError> {
    let current = latest_hourly(series)?;
    let today = match latest_daily_high_low(series) {
        Ok(hl) => Some(hl),
        Err(CoreError::EmptySeries) => None,
        Err(e) => return Err(e),
    };

    let comparisons = ComparisonPeriod::STANDARD
        .iter()
        .map(|period| -> Result<ComparisonRecord, CoreError> {
            let average_temperature = average_hourly(series, period.window_hours)?;
            let average_high_low = match (today, period.window_days) {
                (Some(_), Some(days)) => Some(average_daily_high_low(series, days)?),
                _ => None,
            };
            let assessment = classify_change(relative_change(current, average_temperature));

            Ok(ComparisonRecord {
                period_label: period.label.to_string(),
                average_temperature,
                average_high_low,
                change_magnitude: assessment.magnitude,
                tier: assessment.tier,
                direction_label: assessment.direction_label.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let advice = match today {
        Some(today) => {
            let recent = average_daily_high_low(series, ADVICE_REFERENCE_DAYS)?;
            clothing_advice(today, recent, current)
        }
        None => vec![advice::NORMAL.to_string()],
    };

    Ok(Report {
        location,
        location_source,
        current_temperature: current,
        today,
        comparisons,
        advice,
        fetched_at: Utc::now(),
    })
}

/// Holds the collaborators needed to produce a report. Stateless between calls,
/// so retrying is just calling [`Orchestrator::load`] again.
#[derive(Debug)]
pub struct Orchestrator {
    location: Box<dyn LocationProvider>,
    weather: Box<dyn WeatherProvider>,
    default_location: Location,
    location_timeout: Duration,
}

impl Orchestrator {
    pub fn new(
        location: Box<dyn LocationProvider>,
        weather: Box<dyn WeatherProvider>,
        default_location: Location,
        location_timeout: Duration,
    ) -> Self {
        Self {
            location,
            weather,
            default_location,
            location_timeout,
        }
    }

    pub async fn load(&self) -> Result<Report> {
        let (location, source) = resolve_location(
            self.location.as_ref(),
            &self.default_location,
            self.location_timeout,
        )
        .await;

        let series = self
            .weather
            .fetch_series(&location)
            .await
            .context("Failed to fetch weather data")?;

        tracing::debug!(
            hourly = series.hourly().len(),
            daily = series.daily().len(),
            "weather series fetched"
        );

        let report = build_report(&series, location, source)
            .context("Weather data is too short to compare")?;

        tracing::info!(
            current = report.current_temperature,
            advice = report.advice.len(),
            "report built"
        );
        Ok(report)
    }
}
