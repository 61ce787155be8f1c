//! Alerting and aggregation over a chronological series of energy readings.
//!
//! Everything here is pure: the functions borrow the series, never mutate it,
//! and recompute their results from scratch on every call.

pub mod alert;
pub mod metric;
pub mod reading;
pub mod series;
pub mod summary;

pub use self::{
    alert::{Alert, evaluate},
    metric::Metric,
    reading::EnergyReading,
    series::Series,
    summary::{MetricSummary, averages, distribution},
};
