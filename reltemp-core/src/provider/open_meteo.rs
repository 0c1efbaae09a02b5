use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{Days, NaiveDateTime, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::{HighLow, Location, WeatherSeries};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Days of history requested before today.
const LOOKBACK_DAYS: u64 = 7;
/// Open-Meteo's default `timeformat=iso8601`, in the requested timezone.
const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    timezone: Tz,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(timezone: &str) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, timezone)
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(base_url: &str, timezone: &str) -> Result<Self> {
        let timezone: Tz = timezone
            .parse()
            .map_err(|e| anyhow!("Unknown timezone '{timezone}': {e}"))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timezone,
            http,
        })
    }

    /// Fetch the week up to `now`, a wall-clock time in the provider's timezone.
    /// Samples stamped after `now` are forecasts and are dropped.
    async fn fetch_until(
        &self,
        location: &Location,
        now: NaiveDateTime,
    ) -> Result<WeatherSeries> {
        let url = format!("{}/v1/forecast", self.base_url);
        let end = now.date();
        let start = end
            .checked_sub_days(Days::new(LOOKBACK_DAYS))
            .ok_or_else(|| anyhow!("Date out of range: {end}"))?;
        let start_date = start.format("%Y-%m-%d").to_string();
        let end_date = end.format("%Y-%m-%d").to_string();

        tracing::debug!(%url, %start_date, %end_date, "requesting Open-Meteo history");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", "temperature_2m".to_string()),
                ("daily", "temperature_2m_max,temperature_2m_min".to_string()),
                ("timezone", self.timezone.name().to_string()),
                ("start_date", start_date),
                ("end_date", end_date),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo JSON")?;

        parsed.into_series(now)
    }
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    hourly: OmHourly,
    daily: OmDaily,
}

impl OmResponse {
    fn into_series(self, now: NaiveDateTime) -> Result<WeatherSeries> {
        let OmHourly {
            time,
            temperature_2m,
        } = self.hourly;
        if time.len() != temperature_2m.len() {
            tracing::warn!(
                time = time.len(),
                temperature = temperature_2m.len(),
                "Open-Meteo hourly time/temperature lengths differ; truncating"
            );
        }

        let mut hourly = Vec::with_capacity(temperature_2m.len());
        let mut nulls = 0;
        let mut ahead = 0;
        for (stamp, temp) in time.iter().zip(temperature_2m) {
            let at = NaiveDateTime::parse_from_str(stamp, HOURLY_TIME_FORMAT)
                .with_context(|| format!("Invalid Open-Meteo timestamp '{stamp}'"))?;
            if at > now {
                ahead += 1;
                continue;
            }
            match temp {
                Some(t) => hourly.push(t),
                None => nulls += 1,
            }
        }
        if nulls > 0 {
            tracing::warn!(dropped = nulls, "Open-Meteo hourly data contained nulls");
        }
        tracing::debug!(dropped = ahead, %now, "dropped hourly samples after now");

        let OmDaily {
            temperature_2m_max: maxes,
            temperature_2m_min: mins,
        } = self.daily;
        if maxes.len() != mins.len() {
            tracing::warn!(
                max = maxes.len(),
                min = mins.len(),
                "Open-Meteo daily max/min lengths differ; truncating"
            );
        }

        let pairs = maxes.len().min(mins.len());
        let daily: Vec<HighLow> = maxes
            .into_iter()
            .zip(mins)
            .filter_map(|(high, low)| Some(HighLow::new(high?, low?)))
            .collect();
        if daily.len() < pairs {
            tracing::warn!(dropped = pairs - daily.len(), "Open-Meteo daily data contained nulls");
        }

        Ok(WeatherSeries::new(hourly, daily))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn fetch_series(&self, location: &Location) -> Result<WeatherSeries> {
        let now = Utc::now().with_timezone(&self.timezone).naive_local();
        self.fetch_until(location, now).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
