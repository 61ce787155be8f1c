use comfy_table::Color;

use crate::core::reading::EnergyReading;

/// One of the measured quantities, in the order they are always reported.
#[derive(Debug, enumset::EnumSetType)]
pub enum Metric {
    Solar,
    Battery,
    Diesel,
}

impl Metric {
    pub const fn value(self, reading: &EnergyReading) -> f64 {
        match self {
            Self::Solar => reading.solar_output.0,
            Self::Battery => reading.battery_level.0,
            Self::Diesel => reading.diesel_usage.0,
        }
    }

    /// Label of the per-metric average, which carries the unit.
    pub const fn average_label(self) -> &'static str {
        match self {
            Self::Solar => "Solar (kW)",
            Self::Battery => "Battery (%)",
            Self::Diesel => "Diesel (L/hr)",
        }
    }

    /// Label of the per-metric total, which does not.
    pub const fn total_label(self) -> &'static str {
        match self {
            Self::Solar => "Solar",
            Self::Battery => "Battery",
            Self::Diesel => "Diesel",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Solar => Color::Yellow,
            Self::Battery => Color::Green,
            Self::Diesel => Color::Red,
        }
    }
}

