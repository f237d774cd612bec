//! Drill-down view for one day of the grouping.

use crate::model::{DayKey, ForecastGrouping, ForecastSample};

/// Samples for `day` in ascending time order.
///
/// Equal timestamps keep their grouping order. A day that is not in the
/// grouping yields an empty list.
pub fn detail(grouping: &ForecastGrouping, day: &DayKey) -> Vec<ForecastSample> {
    let Some(samples) = grouping.get(day) else {
        tracing::debug!(%day, "detail requested for a day outside the grouping");
        return Vec::new();
    };

    let mut ordered = samples.to_vec();
    ordered.sort_by_key(|sample| sample.timestamp_utc);
    ordered
}
