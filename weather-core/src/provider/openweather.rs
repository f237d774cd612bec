//! OpenWeather wire format (`/data/2.5/forecast` and `/data/2.5/weather`,
//! metric units) and its conversion into core types.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    model::{CurrentConditions, ForecastPayload, ForecastSample},
    time::parse_utc_timestamp,
};

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

/// Condition keyword, description and icon of the first `weather` entry.
fn condition(weather: Vec<OwWeather>) -> (String, String, String) {
    weather
        .into_iter()
        .next()
        .map(|w| (w.main, w.description, w.icon))
        .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string(), String::new()))
}

impl TryFrom<OwForecastEntry> for ForecastSample {
    type Error = anyhow::Error;

    fn try_from(entry: OwForecastEntry) -> Result<Self> {
        let timestamp_utc = parse_utc_timestamp(&entry.dt_txt)?;
        let (condition_main, condition_description, icon_id) = condition(entry.weather);

        Ok(ForecastSample {
            timestamp_utc,
            temperature_c: entry.main.temp,
            condition_main,
            condition_description,
            icon_id,
        })
    }
}

/// Parse an OpenWeather 5-day / 3-hour forecast document.
pub fn parse_forecast(json: &str) -> Result<ForecastPayload> {
    let parsed: OwForecastResponse =
        serde_json::from_str(json).context("Failed to parse OpenWeather forecast JSON")?;

    let samples = parsed
        .list
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            ForecastSample::try_from(entry)
                .with_context(|| format!("Invalid OpenWeather forecast entry #{idx}"))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(city = %parsed.city.name, samples = samples.len(), "parsed forecast payload");

    Ok(ForecastPayload { city: parsed.city.name, country: parsed.city.country, samples })
}

/// Parse an OpenWeather current-weather document.
pub fn parse_current(json: &str) -> Result<CurrentConditions> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(json).context("Failed to parse OpenWeather current JSON")?;

    let (condition_main, condition_description, icon_id) = condition(parsed.weather);

    Ok(CurrentConditions {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        condition_main,
        condition_description,
        icon_id,
    })
}
