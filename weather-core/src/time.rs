//! Date normalization shared by the projector, the detail view and the
//! share formatter.
//!
//! OpenWeather encodes forecast instants as `YYYY-MM-DD HH:MM:SS` in UTC with
//! no offset marker. [`parse_utc_timestamp`] is the single place such strings
//! are parsed; everything downstream works on `DateTime<Utc>` and converts to
//! the viewer's timezone explicitly.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};

use crate::error::ForecastError;

/// Wall-clock pattern used by the forecast `dt_txt` field.
pub const SOURCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a provider timestamp, asserting UTC.
///
/// The string carries no offset, so it is parsed as a naive wall-clock value
/// and pinned to UTC. It is never interpreted in the machine's local zone.
pub fn parse_utc_timestamp(value: &str) -> Result<DateTime<Utc>, ForecastError> {
    NaiveDateTime::parse_from_str(value.trim(), SOURCE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ForecastError::InvalidTimestamp { value: value.to_string(), source })
}

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Hour of day (0-23) of `instant` as seen in `tz`.
pub fn local_hour<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> u32 {
    instant.with_timezone(tz).hour()
}

/// Parse a fixed UTC offset such as `+02:00`, `-0530` or `Z`.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, ForecastError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    trimmed
        .parse::<FixedOffset>()
        .map_err(|_| ForecastError::InvalidOffset(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn source_timestamp_is_parsed_as_utc() {
        let ts = parse_utc_timestamp("2025-01-29 15:00:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-01-29T15:00:00+00:00");
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let err = parse_utc_timestamp("29/01/2025 15:00").unwrap_err();
        assert!(err.to_string().contains("29/01/2025 15:00"));
    }

    #[test]
    fn late_utc_sample_moves_to_next_local_day_east_of_greenwich() {
        let ts = parse_utc_timestamp("2025-01-29 23:00:00").unwrap();
        assert_eq!(local_date(&ts, &offset(2)), NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
        assert_eq!(local_hour(&ts, &offset(2)), 1);
    }

    #[test]
    fn early_utc_sample_moves_to_previous_local_day_west_of_greenwich() {
        let ts = parse_utc_timestamp("2025-01-30 03:00:00").unwrap();
        assert_eq!(local_date(&ts, &offset(-5)), NaiveDate::from_ymd_opt(2025, 1, 29).unwrap());
        assert_eq!(local_hour(&ts, &offset(-5)), 22);
    }

    #[test]
    fn utc_offset_parsing() {
        assert_eq!(parse_utc_offset("+02:00").unwrap(), offset(2));
        assert_eq!(parse_utc_offset("-05:00").unwrap(), offset(-5));
        assert_eq!(parse_utc_offset("Z").unwrap(), offset(0));
        assert!(parse_utc_offset("two hours").is_err());
    }
}
