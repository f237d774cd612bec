use anyhow::{Context, Result, anyhow};
use std::{
    fmt::Debug,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::model::{CurrentConditions, ForecastPayload};

pub mod openweather;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Supplies already-fetched weather payloads to the core.
pub trait ForecastSource: Debug {
    fn forecast(&self) -> Result<ForecastPayload>;

    /// Current conditions, if this source carries them.
    fn current(&self) -> Result<Option<CurrentConditions>>;
}

/// OpenWeather JSON documents saved on disk (or piped in via `-`).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    forecast_path: Option<PathBuf>,
    current_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new(forecast_path: impl Into<PathBuf>) -> Self {
        Self { forecast_path: Some(forecast_path.into()), current_path: None }
    }

    /// A source that only carries current conditions.
    pub fn current_only(current_path: impl Into<PathBuf>) -> Self {
        Self { forecast_path: None, current_path: Some(current_path.into()) }
    }

    pub fn with_current(mut self, current_path: impl Into<PathBuf>) -> Self {
        self.current_path = Some(current_path.into());
        self
    }
}

impl ForecastSource for JsonFileSource {
    fn forecast(&self) -> Result<ForecastPayload> {
        let path = self
            .forecast_path
            .as_deref()
            .ok_or_else(|| anyhow!("No forecast file given for this source"))?;

        let body = read_payload(path)?;
        openweather::parse_forecast(&body)
            .with_context(|| format!("Invalid forecast file: {}", path.display()))
    }

    fn current(&self) -> Result<Option<CurrentConditions>> {
        let Some(path) = &self.current_path else {
            return Ok(None);
        };

        let body = read_payload(path)?;
        openweather::parse_current(&body)
            .map(Some)
            .with_context(|| format!("Invalid current weather file: {}", path.display()))
    }
}

/// Read a payload from `path`, or from stdin when it is [`STDIN_PATH`].
pub fn read_payload(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read weather payload from stdin")?;
        return Ok(body);
    }

    fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read weather payload: {}\n\
             Hint: save the OpenWeather response first, e.g. \
             `curl 'https://api.openweathermap.org/data/2.5/forecast?q=Toronto&units=metric&appid=KEY' > forecast.json`.",
            path.display()
        )
    })
}
