//! Delta against a historical statistic
//!
//! The gauge can show how the main value changed compared to a past
//! statistic. Retrieval is the host's business: the core only computes the
//! window and asks a [`StatisticsProvider`].

use chrono::{DateTime, Duration, Months, Utc};
use gauge_types::{StatisticsFunction, StatisticsPeriod};
use serde::Serialize;
use thiserror::Error;

/// Errors reported by a statistics backend
#[derive(Debug, Error)]
pub enum StatisticsError {
    #[error("no statistics recorded for {entity}")]
    NotRecorded { entity: String },

    #[error("statistics window ending {end} is out of range")]
    WindowOutOfRange { end: DateTime<Utc> },

    #[error("statistics backend failed for {entity}")]
    Backend {
        entity: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Supplies one aggregated statistic per request.
pub trait StatisticsProvider {
    fn statistic(
        &self,
        entity: &str,
        window: &StatisticsWindow,
    ) -> Result<Option<f64>, StatisticsError>;
}

/// Time range and aggregation to request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub period: StatisticsPeriod,
    pub function: StatisticsFunction,
}

impl StatisticsWindow {
    /// One `period` ending `day_offset` days before `now`.
    pub fn new(
        now: DateTime<Utc>,
        day_offset: u32,
        period: StatisticsPeriod,
        function: StatisticsFunction,
    ) -> Result<Self, StatisticsError> {
        let end = Duration::try_days(day_offset as i64)
            .and_then(|offset| now.checked_sub_signed(offset))
            .ok_or(StatisticsError::WindowOutOfRange { end: now })?;
        let start = match period {
            StatisticsPeriod::FiveMinute => Duration::try_minutes(5).and_then(|d| end.checked_sub_signed(d)),
            StatisticsPeriod::Hour => Duration::try_hours(1).and_then(|d| end.checked_sub_signed(d)),
            StatisticsPeriod::Day => Duration::try_days(1).and_then(|d| end.checked_sub_signed(d)),
            StatisticsPeriod::Week => Duration::try_weeks(1).and_then(|d| end.checked_sub_signed(d)),
            StatisticsPeriod::Month => end.checked_sub_months(Months::new(1)),
        }
        .ok_or(StatisticsError::WindowOutOfRange { end })?;

        Ok(Self {
            start,
            end,
            period,
            function,
        })
    }
}

/// Current value compared to the historical baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delta {
    pub current: f64,
    pub baseline: f64,
    pub change: f64,
    /// `None` when the baseline is 0
    pub change_pct: Option<f64>,
    pub window: StatisticsWindow,
}

impl Delta {
    pub fn new(current: f64, baseline: f64, window: StatisticsWindow) -> Self {
        let change = current - baseline;
        let change_pct = (baseline != 0.0).then(|| change / baseline.abs() * 100.0);
        Self {
            current,
            baseline,
            change,
            change_pct,
            window,
        }
    }
}

/// Ask `provider` for the baseline of `entity` and build the delta.
///
/// Provider errors and missing statistics give no delta.
pub fn resolve_delta(
    provider: &dyn StatisticsProvider,
    entity: &str,
    current: f64,
    window: StatisticsWindow,
) -> Option<Delta> {
    match provider.statistic(entity, &window) {
        Ok(Some(baseline)) if baseline.is_finite() => Some(Delta::new(current, baseline, window)),
        Ok(_) => {
            tracing::debug!(entity, "No statistic for delta");
            None
        }
        Err(err) => {
            tracing::warn!(entity, error = %err, "Statistics lookup failed, hiding delta");
            None
        }
    }
}

/// Statistics from a fixed map of entity -> baseline
#[derive(Debug, Clone, Default)]
pub struct FixedStatistics(hashbrown::HashMap<String, f64>);

impl FixedStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, entity: impl Into<String>, baseline: f64) -> Self {
        self.0.insert(entity.into(), baseline);
        self
    }
}

impl FromIterator<(String, f64)> for FixedStatistics {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl StatisticsProvider for FixedStatistics {
    fn statistic(
        &self,
        entity: &str,
        _window: &StatisticsWindow,
    ) -> Result<Option<f64>, StatisticsError> {
        Ok(self.0.get(entity).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap()
    }

    struct Failing;

    impl StatisticsProvider for Failing {
        fn statistic(&self, entity: &str, _: &StatisticsWindow) -> Result<Option<f64>, StatisticsError> {
            Err(StatisticsError::NotRecorded { entity: entity.to_string() })
        }
    }

    #[test]
    fn window_ends_day_offset_before_now() {
        let window =
            StatisticsWindow::new(now(), 1, StatisticsPeriod::Hour, StatisticsFunction::Mean).unwrap();
        assert_eq!(window.end, Utc.with_ymd_and_hms(2026, 3, 30, 12, 0, 0).unwrap());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 3, 30, 11, 0, 0).unwrap());
    }

    #[test]
    fn month_window_uses_calendar_months() {
        let window =
            StatisticsWindow::new(now(), 0, StatisticsPeriod::Month, StatisticsFunction::Sum).unwrap();
        // March 31 minus one month clamps to the end of February
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap());
    }

    #[test]
    fn window_before_earliest_date_is_out_of_range() {
        let result = StatisticsWindow::new(
            DateTime::<Utc>::MIN_UTC,
            0,
            StatisticsPeriod::Hour,
            StatisticsFunction::Mean,
        );
        assert!(matches!(result, Err(StatisticsError::WindowOutOfRange { .. })));
    }

    #[test]
    fn delta_change_and_percentage() {
        let window =
            StatisticsWindow::new(now(), 1, StatisticsPeriod::Day, StatisticsFunction::Mean).unwrap();
        let delta = Delta::new(150.0, 100.0, window.clone());
        assert_eq!(delta.change, 50.0);
        assert_eq!(delta.change_pct, Some(50.0));

        let delta = Delta::new(5.0, 0.0, window);
        assert_eq!(delta.change_pct, None);
    }

    #[test]
    fn provider_results() {
        let window =
            StatisticsWindow::new(now(), 1, StatisticsPeriod::Hour, StatisticsFunction::Mean).unwrap();
        let stats = FixedStatistics::new().with("sensor.power", 80.0);

        let delta = resolve_delta(&stats, "sensor.power", 100.0, window.clone()).unwrap();
        assert_eq!(delta.change, 20.0);
        assert!(resolve_delta(&stats, "sensor.other", 100.0, window.clone()).is_none());
        assert!(resolve_delta(&Failing, "sensor.power", 100.0, window).is_none());
    }
}
