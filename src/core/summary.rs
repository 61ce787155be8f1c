use enumset::EnumSet;

use crate::core::{metric::Metric, reading::EnergyReading};

/// Per-metric values in the fixed Solar, Battery, Diesel order.
///
/// An empty summary means "no data", which is different from all-zero data.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, derive_more::Deref, derive_more::IntoIterator)]
pub struct MetricSummary(Vec<Entry>);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    pub metric: Metric,
    pub name: &'static str,
    pub value: f64,
}

impl MetricSummary {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.iter().find(|entry| entry.metric == metric).map(|entry| entry.value)
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|entry| entry.value).sum()
    }
}

impl FromIterator<Entry> for MetricSummary {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Arithmetic mean of each metric over the whole series.
pub fn averages(series: &[EnergyReading]) -> MetricSummary {
    if series.is_empty() {
        return MetricSummary::default();
    }
    #[expect(clippy::cast_precision_loss)]
    let count = series.len() as f64;
    EnumSet::<Metric>::all()
        .iter()
        .map(|metric| Entry {
            metric,
            name: metric.average_label(),
            value: sum(series, metric) / count,
        })
        .collect()
}

/// Sum of each metric over the whole series.
///
/// The units are heterogeneous and deliberately left as they are.
pub fn distribution(series: &[EnergyReading]) -> MetricSummary {
    if series.is_empty() {
        return MetricSummary::default();
    }
    EnumSet::<Metric>::all()
        .iter()
        .map(|metric| Entry { metric, name: metric.total_label(), value: sum(series, metric) })
        .collect()
}

fn sum(series: &[EnergyReading], metric: Metric) -> f64 {
    series.iter().map(|reading| metric.value(reading)).sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{DateTime, TimeDelta, Utc};

    use super::*;
    use crate::quantity::{fuel::LitresPerHour, percentage::Percentage, power::Kilowatts};

    fn series(points: &[(f64, f64, f64)]) -> Vec<EnergyReading> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(solar_output, battery_level, diesel_usage))| {
                EnergyReading::builder()
                    .timestamp(DateTime::<Utc>::UNIX_EPOCH + TimeDelta::minutes(i as i64))
                    .solar_output(Kilowatts(solar_output))
                    .battery_level(Percentage(battery_level))
                    .diesel_usage(LitresPerHour(diesel_usage))
                    .build()
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(averages(&[]).is_empty());
        assert!(distribution(&[]).is_empty());
    }

    #[test]
    fn test_all_zero_is_not_empty() {
        let series = series(&[(0.0, 0.0, 0.0)]);
        assert_eq!(averages(&series).len(), 3);
        assert_eq!(distribution(&series).len(), 3);
        assert_abs_diff_eq!(distribution(&series).total(), 0.0);
    }

    #[test]
    fn test_averages() {
        let averages = averages(&series(&[(10.0, 40.0, 1.0), (20.0, 60.0, 2.0), (30.0, 80.0, 6.0)]));
        let names: Vec<_> = averages.iter().map(|entry| entry.name).collect();
        assert_eq!(names, ["Solar (kW)", "Battery (%)", "Diesel (L/hr)"]);
        assert_abs_diff_eq!(averages.get(Metric::Solar).unwrap(), 20.0);
        assert_abs_diff_eq!(averages.get(Metric::Battery).unwrap(), 60.0);
        assert_abs_diff_eq!(averages.get(Metric::Diesel).unwrap(), 3.0);
    }

    #[test]
    fn test_distribution() {
        let distribution =
            distribution(&series(&[(10.0, 40.0, 1.0), (20.0, 60.0, 2.0), (30.0, 80.0, 6.0)]));
        let names: Vec<_> = distribution.iter().map(|entry| entry.name).collect();
        assert_eq!(names, ["Solar", "Battery", "Diesel"]);
        assert_abs_diff_eq!(distribution.get(Metric::Solar).unwrap(), 60.0);
        assert_abs_diff_eq!(distribution.get(Metric::Battery).unwrap(), 180.0);
        assert_abs_diff_eq!(distribution.get(Metric::Diesel).unwrap(), 9.0);
        assert_abs_diff_eq!(distribution.total(), 249.0);
    }

    #[test]
    fn test_mean_times_count_is_sum() {
        let series = series(&[
            (12.34, 56.78, 0.91),
            (5.0, 99.99, 4.2),
            (49.5, 20.01, 0.0),
            (33.3, 71.1, 2.22),
            (7.77, 88.8, 3.33),
        ]);
        let averages = averages(&series);
        let distribution = distribution(&series);
        for (average, total) in averages.into_iter().zip(distribution) {
            assert_eq!(average.metric, total.metric);
            assert_abs_diff_eq!(average.value * 5.0, total.value, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let averages = averages(&series(&[(f64::NAN, 50.0, 1.0), (10.0, 50.0, 1.0)]));
        assert!(averages.get(Metric::Solar).unwrap().is_nan());
        assert_abs_diff_eq!(averages.get(Metric::Battery).unwrap(), 50.0);
    }
}
