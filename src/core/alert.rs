use std::fmt::{Display, Formatter};

use enumset::EnumSet;

use crate::{
    core::reading::EnergyReading,
    quantity::{percentage::Percentage, power::Kilowatts},
};

/// Battery levels strictly below this raise [`Alert::BatteryLow`].
pub const LOW_BATTERY_LEVEL: Percentage = Percentage(20.0);

/// Solar output drops strictly above this many percent raise [`Alert::SolarDrop`].
pub const SOLAR_DROP_PERCENT: f64 = 50.0;

#[derive(Debug, enumset::EnumSetType)]
pub enum Alert {
    BatteryLow,
    SolarDrop,
}

impl Display for Alert {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BatteryLow => write!(f, "Battery level is below {:.0}%!", LOW_BATTERY_LEVEL.0),
            Self::SolarDrop => write!(f, "Sudden drop in solar output detected!"),
        }
    }
}

/// Check the latest reading, and the one before it, against the alert thresholds.
///
/// Older history is irrelevant: this is a point-in-time check, not a trend detector.
/// The set iterates in declaration order, battery first.
pub fn evaluate(series: &[EnergyReading]) -> EnumSet<Alert> {
    let mut alerts = EnumSet::empty();
    let Some(latest) = series.last() else {
        return alerts;
    };

    if latest.battery_level < LOW_BATTERY_LEVEL {
        alerts.insert(Alert::BatteryLow);
    }

    if let [.., previous, latest] = series
        && let Some(percent) = drop_percent(previous.solar_output, latest.solar_output)
        && percent > SOLAR_DROP_PERCENT
    {
        alerts.insert(Alert::SolarDrop);
    }

    alerts
}

/// Relative decrease in percent, or `None` when there is nothing to compare against.
///
/// Only a zero previous output is skipped. A drop from any positive output to zero is still 100%.
pub fn drop_percent(previous: Kilowatts, latest: Kilowatts) -> Option<f64> {
    if previous > Kilowatts::ZERO {
        Some((previous - latest) / previous * 100.0)
    } else {
        None
    }
}
