//! Share messages and the targets they are dispatched to.
//!
//! The text builders are pure; [`share_target`] only decides *where* a message
//! goes ([`ShareTarget::Link`] or [`ShareTarget::Clipboard`]). Opening links
//! and writing the clipboard belong to the host.

use std::{fmt, str::FromStr};

use chrono::TimeZone;

use crate::{
    error::ForecastError,
    model::{CurrentConditions, ForecastSample},
};

const SHARE_FOOTER: &str = "Shared via Weather App";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Sms,
    WhatsApp,
    Facebook,
    Twitter,
    Telegram,
    Copy,
}

impl SharePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SharePlatform::Sms => "sms",
            SharePlatform::WhatsApp => "whatsapp",
            SharePlatform::Facebook => "facebook",
            SharePlatform::Twitter => "twitter",
            SharePlatform::Telegram => "telegram",
            SharePlatform::Copy => "copy",
        }
    }

    /// Label shown in share menus.
    pub fn label(&self) -> &'static str {
        match self {
            SharePlatform::Sms => "Text Message",
            SharePlatform::WhatsApp => "WhatsApp",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Twitter => "Twitter",
            SharePlatform::Telegram => "Telegram",
            SharePlatform::Copy => "Copy to Clipboard",
        }
    }

    pub const fn all() -> &'static [SharePlatform] {
        &[
            SharePlatform::Sms,
            SharePlatform::WhatsApp,
            SharePlatform::Facebook,
            SharePlatform::Twitter,
            SharePlatform::Telegram,
            SharePlatform::Copy,
        ]
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SharePlatform {
    type Error = ForecastError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        SharePlatform::all()
            .iter()
            .copied()
            .find(|platform| platform.as_str() == lower)
            .ok_or_else(|| ForecastError::UnknownPlatform(value.to_string()))
    }
}

impl FromStr for SharePlatform {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SharePlatform::try_from(s)
    }
}

/// Where a share action ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareTarget {
    /// URL to open in a browser or app.
    Link(String),
    /// Text to place on the clipboard.
    Clipboard(String),
}

/// Resolve `platform` into a link carrying a day forecast `message` and
/// `app_url`, or a clipboard payload for [`SharePlatform::Copy`].
pub fn share_target(platform: SharePlatform, message: &str, app_url: &str) -> ShareTarget {
    resolve(platform, message, app_url, true)
}

/// Like [`share_target`] for the current-conditions message; Facebook gets
/// the bare sharer link without a quote.
pub fn share_current_target(platform: SharePlatform, message: &str, app_url: &str) -> ShareTarget {
    resolve(platform, message, app_url, false)
}

fn resolve(platform: SharePlatform, message: &str, app_url: &str, quote: bool) -> ShareTarget {
    let text = urlencoding::encode(message);
    let url = urlencoding::encode(app_url);

    match platform {
        SharePlatform::WhatsApp => ShareTarget::Link(format!("https://wa.me/?text={text}%0A{url}")),
        SharePlatform::Twitter => ShareTarget::Link(format!(
            "https://twitter.com/intent/tweet?text={text}&url={url}"
        )),
        SharePlatform::Facebook if quote => ShareTarget::Link(format!(
            "https://www.facebook.com/sharer/sharer.php?u={url}&quote={text}"
        )),
        SharePlatform::Facebook => {
            ShareTarget::Link(format!("https://www.facebook.com/sharer/sharer.php?u={url}"))
        }
        SharePlatform::Telegram => {
            ShareTarget::Link(format!("https://t.me/share/url?url={url}&text={text}"))
        }
        SharePlatform::Sms => ShareTarget::Link(format!("sms:?body={text}%0A{url}")),
        SharePlatform::Copy => ShareTarget::Clipboard(format!("{message}\n{app_url}")),
    }
}

/// Header line plus one `<HH:MM> - <temp>°C - <description>` line per sample,
/// in the order given. Times and the header date are local to `tz`.
///
/// Expects the non-empty, time-ordered output of [`crate::detail::detail`];
/// an empty slice yields an empty string.
pub fn format_day_message<Tz>(samples: &[ForecastSample], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(first) = samples.first() else {
        return String::new();
    };

    let date = first.timestamp_utc.with_timezone(tz).format("%a %b %d %Y");
    let mut message = format!("Weather forecast for {date}:");

    for sample in samples {
        let time = sample.timestamp_utc.with_timezone(tz).format("%H:%M");
        message.push_str(&format!(
            "\n{time} - {}°C - {}",
            sample.temperature_c, sample.condition_description
        ));
    }

    message
}

/// [`format_day_message`] with the app footer, ready for [`share_target`].
pub fn share_day_message<Tz>(samples: &[ForecastSample], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("{}\n\n{SHARE_FOOTER}", format_day_message(samples, tz))
}

pub fn format_current_message(current: &CurrentConditions) -> String {
    format!(
        "Check out the weather in {} right now!\nTemperature: {}°C\nCondition: {}",
        current.location_name, current.temperature_c, current.condition_description
    )
}
