//! Builds the summary view of a forecast: future local days, and one
//! representative sample for each of the first few.

use chrono::{DateTime, TimeZone};

use crate::{
    model::{DayKey, ForecastGrouping, ForecastSample, Projection, Representative},
    time::{local_date, local_hour},
};

/// How many upcoming days the summary covers.
pub const MAX_SUMMARY_DAYS: usize = 5;

/// Local hour preferred as a day's representative sample (2 PM).
pub const REPRESENTATIVE_HOUR: u32 = 14;

/// Group `samples` by local date in `reference`'s timezone, keeping only days
/// after `reference`'s own local date, and pick a representative for each of
/// the first [`MAX_SUMMARY_DAYS`] days.
///
/// Input order is irrelevant and duplicate timestamps are kept as separate
/// samples. An empty input gives an empty projection.
pub fn project<Tz: TimeZone>(samples: &[ForecastSample], reference: &DateTime<Tz>) -> Projection {
    let tz = reference.timezone();
    let grouping = group_by_local_day(samples, &tz, DayKey::new(reference.date_naive()));

    let representatives: Vec<Representative> = grouping
        .iter()
        .take(MAX_SUMMARY_DAYS)
        .filter_map(|(day, day_samples)| {
            pick_representative(day_samples, &tz)
                .map(|sample| Representative { day: *day, sample: sample.clone() })
        })
        .collect();

    tracing::debug!(
        input = samples.len(),
        grouped = grouping.sample_count(),
        days = grouping.len(),
        representatives = representatives.len(),
        today = %reference.date_naive(),
        "projected forecast"
    );

    Projection { grouping, representatives }
}

/// Bucket samples by local day, dropping everything on or before `today`.
pub fn group_by_local_day<Tz: TimeZone>(
    samples: &[ForecastSample],
    tz: &Tz,
    today: DayKey,
) -> ForecastGrouping {
    let mut grouping = ForecastGrouping::default();
    for sample in samples {
        let day = DayKey::new(local_date(&sample.timestamp_utc, tz));
        if day > today {
            grouping.push(day, sample.clone());
        }
    }
    grouping
}

/// The first sample at local [`REPRESENTATIVE_HOUR`] once sorted by time,
/// otherwise the sample at the floored midpoint. `None` only for an empty day.
pub fn pick_representative<'a, Tz: TimeZone>(
    day_samples: &'a [ForecastSample],
    tz: &Tz,
) -> Option<&'a ForecastSample> {
    let mut sorted: Vec<&ForecastSample> = day_samples.iter().collect();
    sorted.sort_by_key(|sample| sample.timestamp_utc);

    sorted
        .iter()
        .find(|sample| local_hour(&sample.timestamp_utc, tz) == REPRESENTATIVE_HOUR)
        .or_else(|| sorted.get(sorted.len() / 2))
        .copied()
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::test_support::{day, reference_at, sample};

    fn plus_two() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    /// Viewer at UTC+02:00, "now" = 2025-01-29 10:00 local.
    ///
    /// Local days (UTC+2):
    /// - D1 2025-01-30: 5 samples, none at 14:00
    /// - D2 2025-01-31: 8 samples, 3-hourly from 02:00 incl. 14:00
    /// - D3 2025-02-01: 3 samples, none at 14:00
    /// - plus one sample on today's local date
    fn worked_example() -> Vec<ForecastSample> {
        let mut samples = vec![
            // today (local 2025-01-29 17:00)
            sample("2025-01-29 15:00:00", 1.0, "today"),
            // D1, deliberately unsorted; local hours 03, 06, 09, 12, 18
            sample("2025-01-30 10:00:00", 11.0, "d1-12"),
            sample("2025-01-30 01:00:00", 11.0, "d1-03"),
            sample("2025-01-30 16:00:00", 11.0, "d1-18"),
            sample("2025-01-30 07:00:00", 11.0, "d1-09"),
            sample("2025-01-30 04:00:00", 11.0, "d1-06"),
            // D3; local hours 05, 08, 11
            sample("2025-02-01 09:00:00", 13.0, "d3-11"),
            sample("2025-02-01 03:00:00", 13.0, "d3-05"),
            sample("2025-02-01 06:00:00", 13.0, "d3-08"),
        ];
        // D2; local hours 02, 05, 08, 11, 14, 17, 20, 23
        for utc_hour in [0, 3, 6, 9, 12, 15, 18, 21] {
            let ts = format!("2025-01-31 {utc_hour:02}:00:00");
            let label = format!("d2-{:02}", utc_hour + 2);
            samples.push(sample(&ts, 12.0, &label));
        }
        samples
    }

    #[test]
    fn worked_example_groups_and_picks_representatives() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let projection = project(&worked_example(), &reference);

        let keys: Vec<String> = projection.grouping.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["2025-01-30", "2025-01-31", "2025-02-01"]);
        assert_eq!(projection.grouping.get(&day("2025-01-30")).unwrap().len(), 5);
        assert_eq!(projection.grouping.get(&day("2025-01-31")).unwrap().len(), 8);
        assert_eq!(projection.grouping.get(&day("2025-02-01")).unwrap().len(), 3);

        let picked: Vec<(String, &str)> = projection
            .representatives
            .iter()
            .map(|r| (r.day.to_string(), r.sample.condition_description.as_str()))
            .collect();
        assert_eq!(
            picked,
            [
                ("2025-01-30".to_string(), "d1-09"),
                ("2025-01-31".to_string(), "d2-14"),
                ("2025-02-01".to_string(), "d3-08"),
            ]
        );
    }

    #[test]
    fn today_is_never_grouped() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let projection = project(&worked_example(), &reference);

        assert!(!projection.grouping.contains(&day("2025-01-29")));
        assert!(projection
            .grouping
            .iter()
            .flat_map(|(_, samples)| samples)
            .all(|s| s.condition_description != "today"));
    }

    #[test]
    fn every_future_sample_lands_in_exactly_one_group() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let input = worked_example();
        let projection = project(&input, &reference);

        assert_eq!(projection.grouping.sample_count(), input.len() - 1);
        for s in input.iter().filter(|s| s.condition_description != "today") {
            let hits = projection
                .grouping
                .iter()
                .filter(|(_, group)| group.contains(s))
                .count();
            assert_eq!(hits, 1, "{} should appear once", s.condition_description);
        }
    }

    #[test]
    fn representatives_are_capped_at_five_ascending_days() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let samples: Vec<ForecastSample> = (1..=7)
            .rev()
            .map(|offset| {
                let ts = format!("2025-02-{offset:02} 10:00:00");
                sample(&ts, f64::from(offset), &format!("feb-{offset}"))
            })
            .collect();

        let projection = project(&samples, &reference);
        assert_eq!(projection.grouping.len(), 7);
        assert_eq!(projection.representatives.len(), MAX_SUMMARY_DAYS);

        let days: Vec<DayKey> = projection.representatives.iter().map(|r| r.day).collect();
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(days[0], day("2025-02-01"));
        assert_eq!(days[4], day("2025-02-05"));
    }

    #[test]
    fn fewer_days_than_cap_is_not_an_error() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let samples = vec![sample("2025-01-30 10:00:00", 4.0, "only")];

        let projection = project(&samples, &reference);
        assert_eq!(projection.representatives.len(), 1);
    }

    #[test]
    fn empty_input_gives_empty_projection() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let projection = project(&[], &reference);

        assert!(projection.grouping.is_empty());
        assert!(projection.representatives.is_empty());
    }

    #[test]
    fn grouping_uses_viewer_timezone_not_utc() {
        // 23:00 UTC on the 29th is already the 30th at UTC+2
        let samples = vec![sample("2025-01-29 23:00:00", 0.0, "late")];

        let at_plus_two = project(&samples, &reference_at("2025-01-29T10:00:00+02:00"));
        assert!(at_plus_two.grouping.contains(&day("2025-01-30")));

        let at_utc = project(&samples, &reference_at("2025-01-29T10:00:00+00:00"));
        assert!(at_utc.grouping.is_empty());
    }

    #[test]
    fn past_days_are_dropped() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let samples = vec![
            sample("2025-01-27 12:00:00", 0.0, "stale"),
            sample("2025-01-30 12:00:00", 0.0, "fresh"),
        ];

        let projection = project(&samples, &reference);
        let keys: Vec<String> = projection.grouping.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["2025-01-30"]);
    }

    #[test]
    fn duplicate_two_pm_samples_pick_the_first_after_sorting() {
        let samples = vec![
            sample("2025-01-30 12:00:00", 20.0, "second"),
            sample("2025-01-30 09:00:00", 10.0, "morning"),
            sample("2025-01-30 12:00:00", 20.0, "first"),
        ];
        // stable sort keeps "second" ahead of "first" for the equal timestamp
        let picked = pick_representative(&samples, &plus_two()).unwrap();
        assert_eq!(picked.condition_description, "second");
    }

    #[test]
    fn midpoint_is_floored_for_even_counts() {
        let samples = vec![
            sample("2025-01-30 00:00:00", 0.0, "a"),
            sample("2025-01-30 03:00:00", 0.0, "b"),
            sample("2025-01-30 06:00:00", 0.0, "c"),
            sample("2025-01-30 09:00:00", 0.0, "d"),
        ];
        // local hours at +2: 02, 05, 08, 11
        let picked = pick_representative(&samples, &plus_two()).unwrap();
        assert_eq!(picked.condition_description, "c");
    }

    #[test]
    fn hour_fourteen_is_judged_in_local_time() {
        let samples = vec![
            sample("2025-01-30 09:00:00", 0.0, "utc-09"),
            sample("2025-01-30 12:00:00", 0.0, "local-14"),
            sample("2025-01-30 14:00:00", 0.0, "utc-14"),
        ];
        let picked = pick_representative(&samples, &plus_two()).unwrap();
        assert_eq!(picked.condition_description, "local-14");
    }

    #[test]
    fn empty_day_has_no_representative() {
        assert!(pick_representative(&[], &plus_two()).is_none());
    }

    #[test]
    fn representative_is_drawn_from_its_own_day() {
        let reference = reference_at("2025-01-29T10:00:00+02:00");
        let projection = project(&worked_example(), &reference);

        for rep in &projection.representatives {
            let group = projection.grouping.get(&rep.day).unwrap();
            assert!(group.contains(&rep.sample));
        }
    }
}
