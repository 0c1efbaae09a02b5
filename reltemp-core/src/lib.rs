//! Core library for the `reltemp` CLI.
//!
//! This crate defines:
//! - Pure derivation over a temperature history: latest values, trailing
//!   averages, change tiers and clothing advice
//! - Abstractions over weather and location providers
//! - Configuration handling
//! - The orchestrator that turns a location into a [`Report`]
//!
//! It is used by `reltemp-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod aggregate;
pub mod compare;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;
pub mod report;
pub mod series;

pub use compare::{ChangeAssessment, ChangeTier};
pub use config::{Config, LocationConfig};
pub use error::CoreError;
pub use location::{FixedLocation, LocationError, LocationProvider, NoLocation};
pub use model::{
    ComparisonRecord, HighLow, Location, LocationSource, Report, TemperaturePoint, WeatherSeries,
};
pub use provider::{ProviderId, WeatherProvider, provider_from_config};
pub use report::{ComparisonPeriod, Orchestrator, build_report};
