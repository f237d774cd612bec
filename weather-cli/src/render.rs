//! Plain-text rendering of core results for the terminal.

use chrono::FixedOffset;

use weather_core::{
    CurrentConditions, DayKey, ForecastSample, Representative, SharePlatform, ShareTarget,
    background::background_for,
};

pub fn current(current: &CurrentConditions) -> String {
    format!(
        "Now: {}°C, {} (background: {})",
        current.temperature_c,
        current.condition_description,
        background_for(&current.condition_main)
    )
}

/// One line per upcoming day: weekday, key, local time of the representative,
/// temperature, description and icon.
pub fn summary(representatives: &[Representative], tz: &FixedOffset) -> String {
    if representatives.is_empty() {
        return "No upcoming days in this forecast.".to_string();
    }

    let mut out = format!("Next {} days:", representatives.len());
    for rep in representatives {
        let local = rep.sample.timestamp_utc.with_timezone(tz);
        out.push_str(&format!(
            "\n  {}  {}  {}  {:>6}°C  {}  {}",
            rep.day.date().format("%a %b %d"),
            rep.day,
            local.format("%H:%M"),
            rep.sample.temperature_c,
            rep.sample.condition_description,
            rep.sample.icon_url(),
        ));
    }
    out
}

pub fn day(day: &DayKey, samples: &[ForecastSample], tz: &FixedOffset) -> String {
    let mut out = format!("{} ({day})", day.date().format("%A %b %d %Y"));
    for sample in samples {
        out.push_str(&format!(
            "\n  {}  {:>6}°C  {}",
            sample.timestamp_utc.with_timezone(tz).format("%H:%M"),
            sample.temperature_c,
            sample.condition_description,
        ));
    }
    out
}

pub fn share_target(platform: SharePlatform, target: &ShareTarget) -> String {
    match target {
        ShareTarget::Link(url) => format!("{}: open this link to share\n{url}", platform.label()),
        ShareTarget::Clipboard(text) => format!("{}: copy the text below\n\n{text}", platform.label()),
    }
}
