//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - UTC-safe timestamp normalization
//! - Day projection of a 3-hour forecast (grouping, representatives, detail)
//! - Share message formatting and share-target resolution
//! - Payload ingestion from OpenWeather JSON
//! - Configuration handling
//!
//! Everything except ingestion and config I/O is pure. It is used by
//! `weather-cli`, but can also be reused by other binaries or services.

pub mod background;
pub mod config;
pub mod detail;
pub mod error;
pub mod model;
pub mod projector;
pub mod provider;
pub mod share;
pub mod time;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use detail::detail;
pub use error::ForecastError;
pub use model::{
    CurrentConditions, DayKey, ForecastGrouping, ForecastPayload, ForecastSample, Projection,
    Representative,
};
pub use projector::project;
pub use provider::{ForecastSource, JsonFileSource};
pub use share::{SharePlatform, ShareTarget, format_day_message};
