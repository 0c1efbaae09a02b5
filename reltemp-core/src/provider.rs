use crate::{Config, Location, WeatherSeries, provider::open_meteo::OpenMeteoProvider};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod open_meteo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenMeteo,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenMeteo => "open-meteo",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenMeteo]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "open-meteo" | "openmeteo" => Ok(ProviderId::OpenMeteo),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: open-meteo."
            )),
        }
    }
}

/// Source of the hourly/daily temperature history for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_series(&self, location: &Location) -> anyhow::Result<WeatherSeries>;
}

/// Construct the configured provider.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.provider_id()?;

    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::OpenMeteo => Box::new(OpenMeteoProvider::new(config.timezone())?),
    };

    Ok(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_is_case_insensitive() {
        assert_eq!(ProviderId::try_from("Open-Meteo").unwrap(), ProviderId::OpenMeteo);
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn provider_from_default_config_works() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn provider_from_config_rejects_unknown_provider() {
        let cfg = Config {
            provider: Some("weatherapi".to_string()),
            ..Config::default()
        };
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Unknown provider 'weatherapi'"));
    }
}
