use chrono::{DateTime, FixedOffset};

use crate::{
    model::{DayKey, ForecastSample},
    time::parse_utc_timestamp,
};

/// Sample at a provider-style UTC timestamp, labelled through its description.
pub(crate) fn sample(ts: &str, temperature_c: f64, description: &str) -> ForecastSample {
    ForecastSample {
        timestamp_utc: parse_utc_timestamp(ts).expect("valid test timestamp"),
        temperature_c,
        condition_main: "Clouds".to_string(),
        condition_description: description.to_string(),
        icon_id: "04d".to_string(),
    }
}

pub(crate) fn reference_at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid test reference")
}

pub(crate) fn day(iso: &str) -> DayKey {
    iso.parse().expect("valid test day")
}
