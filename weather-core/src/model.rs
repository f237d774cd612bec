use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// One 3-hour forecast point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp_utc: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition_main: String,
    pub condition_description: String,
    pub icon_id: String,
}

impl ForecastSample {
    /// Display asset for the sample's icon.
    pub fn icon_url(&self) -> String {
        format!("http://openweathermap.org/img/wn/{}@2x.png", self.icon_id)
    }
}

/// Local calendar date used to group samples, shown as `YYYY-MM-DD`.
///
/// Ordering follows the calendar, which is also the lexicographic order of
/// the ISO rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ForecastError::InvalidDayKey(s.to_string()))
    }
}

/// Future local days mapped to the samples that fall on them.
///
/// Samples inside a group keep the order they were inserted in; use
/// [`crate::detail::detail`] for a time-ordered view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastGrouping {
    days: BTreeMap<DayKey, Vec<ForecastSample>>,
}

impl ForecastGrouping {
    pub(crate) fn push(&mut self, day: DayKey, sample: ForecastSample) {
        self.days.entry(day).or_default().push(sample);
    }

    /// Day keys in ascending calendar order.
    pub fn keys(&self) -> impl Iterator<Item = &DayKey> {
        self.days.keys()
    }

    pub fn get(&self, day: &DayKey) -> Option<&[ForecastSample]> {
        self.days.get(day).map(Vec::as_slice)
    }

    pub fn contains(&self, day: &DayKey) -> bool {
        self.days.contains_key(day)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &[ForecastSample])> {
        self.days.iter().map(|(day, samples)| (day, samples.as_slice()))
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of samples across all days.
    pub fn sample_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// The sample chosen to summarize one upcoming day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Representative {
    pub day: DayKey,
    pub sample: ForecastSample,
}

/// Output of [`crate::projector::project`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Projection {
    pub grouping: ForecastGrouping,
    pub representatives: Vec<Representative>,
}

/// A forecast payload after conversion from the provider's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub city: String,
    pub country: String,
    pub samples: Vec<ForecastSample>,
}

impl ForecastPayload {
    pub fn location_name(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

/// Conditions right now, from the provider's current-weather payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition_main: String,
    pub condition_description: String,
    pub icon_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_display_and_parse_agree() {
        let key: DayKey = "2025-01-30".parse().expect("valid day");
        assert_eq!(key.to_string(), "2025-01-30");
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
    }

    #[test]
    fn day_key_rejects_other_formats() {
        let err = "30/01/2025".parse::<DayKey>().unwrap_err();
        assert!(err.to_string().contains("30/01/2025"));
    }

    #[test]
    fn day_key_order_matches_iso_string_order() {
        let mut keys: Vec<DayKey> = ["2025-02-01", "2024-12-31", "2025-01-09", "2025-01-10"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        keys.sort();

        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        let mut lexical = rendered.clone();
        lexical.sort();
        assert_eq!(rendered, lexical);
    }

    #[test]
    fn icon_url_points_at_openweather_assets() {
        let sample = ForecastSample {
            timestamp_utc: DateTime::from_timestamp(0, 0).unwrap(),
            temperature_c: 3.5,
            condition_main: "Rain".into(),
            condition_description: "light rain".into(),
            icon_id: "10d".into(),
        };
        assert_eq!(sample.icon_url(), "http://openweathermap.org/img/wn/10d@2x.png");
    }
}
