use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, FixedOffset, Local};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use std::path::PathBuf;

use weather_core::{
    Config, DayKey, ForecastSample, ForecastSource, JsonFileSource, SharePlatform,
    background::background_for, detail, project,
    share::{format_current_message, share_current_target, share_day_message, share_target},
    time::parse_utc_offset,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reference instant (RFC 3339); defaults to now.
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Viewer UTC offset, e.g. "+02:00"; overrides the configured one.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure viewer offset, share link and default share platform.
    Configure,

    /// Show the next days of a saved OpenWeather forecast.
    Summary {
        /// Forecast JSON file, or "-" for stdin.
        forecast: PathBuf,

        /// Current-weather JSON file.
        #[arg(long)]
        current: Option<PathBuf>,
    },

    /// Show every 3-hour sample of one day.
    Day {
        /// Forecast JSON file, or "-" for stdin.
        forecast: PathBuf,

        /// Day as YYYY-MM-DD.
        date: String,
    },

    /// Share the 3-hour breakdown of one day.
    ShareDay {
        /// Forecast JSON file, or "-" for stdin.
        forecast: PathBuf,

        /// Day as YYYY-MM-DD.
        date: String,

        /// sms, whatsapp, facebook, twitter, telegram or copy.
        #[arg(long)]
        platform: Option<SharePlatform>,
    },

    /// Share the current conditions.
    ShareNow {
        /// Current-weather JSON file, or "-" for stdin.
        current: PathBuf,

        #[arg(long)]
        platform: Option<SharePlatform>,
    },

    /// Print the background asset for a condition keyword.
    Background { condition: String },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        let reference = self.reference(&config)?;
        tracing::debug!(%reference, "resolved reference instant");

        match self.command {
            Command::Configure => configure(config),
            Command::Summary { forecast, current } => {
                let mut source = JsonFileSource::new(forecast);
                if let Some(current) = current {
                    source = source.with_current(current);
                }
                summary(&source, &reference)
            }
            Command::Day { forecast, date } => {
                let day = parse_day(&date)?;
                let samples = day_samples(&JsonFileSource::new(forecast), &reference, &day)?;
                println!("{}", render::day(&day, &samples, &reference.timezone()));
                Ok(())
            }
            Command::ShareDay { forecast, date, platform } => {
                let day = parse_day(&date)?;
                let platform = resolve_platform(platform, &config)?;
                let samples = day_samples(&JsonFileSource::new(forecast), &reference, &day)?;
                let message = share_day_message(&samples, &reference.timezone());
                let target = share_target(platform, &message, config.app_url());
                println!("{}", render::share_target(platform, &target));
                Ok(())
            }
            Command::ShareNow { current, platform } => {
                let platform = resolve_platform(platform, &config)?;
                let now = JsonFileSource::current_only(current)
                    .current()?
                    .ok_or_else(|| anyhow!("No current weather available"))?;
                let message = format_current_message(&now);
                let target = share_current_target(platform, &message, config.app_url());
                println!("{}", render::share_target(platform, &target));
                Ok(())
            }
            Command::Background { condition } => {
                println!("{}", background_for(&condition));
                Ok(())
            }
        }
    }

    /// "Now" in the viewer's timezone: `--offset`, else the configured offset,
    /// else the machine's current local offset.
    fn reference(&self, config: &Config) -> Result<DateTime<FixedOffset>> {
        let offset = match &self.offset {
            Some(raw) => Some(parse_utc_offset(raw)?),
            None => config.utc_offset()?,
        };

        let now = match &self.now {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --now '{raw}': expected RFC 3339"))?,
            None => Local::now().fixed_offset(),
        };

        Ok(match offset {
            Some(offset) => now.with_timezone(&offset),
            None => now.with_timezone(&Local).fixed_offset(),
        })
    }
}

fn summary(source: &dyn ForecastSource, reference: &DateTime<FixedOffset>) -> Result<()> {
    let payload = source.forecast()?;
    let projection = project(&payload.samples, reference);

    println!("{}", payload.location_name());
    if let Some(current) = source.current()? {
        println!("{}", render::current(&current));
    }
    println!();
    println!("{}", render::summary(&projection.representatives, &reference.timezone()));
    Ok(())
}

fn day_samples(
    source: &dyn ForecastSource,
    reference: &DateTime<FixedOffset>,
    day: &DayKey,
) -> Result<Vec<ForecastSample>> {
    let payload = source.forecast()?;
    let projection = project(&payload.samples, reference);
    let samples = detail(&projection.grouping, day);

    if samples.is_empty() {
        let available: Vec<String> = projection.grouping.keys().map(ToString::to_string).collect();
        tracing::warn!(%day, "requested day is not in the forecast");
        bail!(
            "No forecast for {day}.\nHint: pick one of the upcoming days: {}.",
            if available.is_empty() { "none".to_string() } else { available.join(", ") }
        );
    }

    Ok(samples)
}

fn parse_day(raw: &str) -> Result<DayKey> {
    Ok(raw.parse::<DayKey>()?)
}

fn resolve_platform(explicit: Option<SharePlatform>, config: &Config) -> Result<SharePlatform> {
    if let Some(platform) = explicit {
        return Ok(platform);
    }

    config.default_platform()?.ok_or_else(|| {
        anyhow!(
            "No share platform given.\n\
             Hint: pass `--platform <name>` or run `weather configure` to set a default."
        )
    })
}

fn configure(mut config: Config) -> Result<()> {
    let offset = Text::new("Viewer UTC offset (empty for system local time):")
        .with_default(config.utc_offset.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read UTC offset")?;
    if offset.trim().is_empty() {
        config.utc_offset = None;
    } else {
        config.set_utc_offset(&offset)?;
    }

    let app_url = Text::new("Link appended to shared messages:")
        .with_default(config.app_url())
        .prompt()
        .context("Failed to read app link")?;
    config.app_url = Some(app_url.trim().to_string());

    let labels: Vec<&str> = SharePlatform::all().iter().map(SharePlatform::label).collect();
    let choice = Select::new("Default share platform:", labels)
        .raw_prompt()
        .context("Failed to read share platform")?;
    let platform = SharePlatform::all()
        .get(choice.index)
        .copied()
        .ok_or_else(|| anyhow!("Unknown share platform choice: {}", choice.value))?;
    config.set_default_platform(platform);

    config.save()?;
    tracing::info!(path = %Config::config_file_path()?.display(), "configuration saved");
    println!("Configuration saved.");
    Ok(())
}
