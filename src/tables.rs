use chrono::Local;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;

use crate::core::{
    Alert,
    EnergyReading,
    MetricSummary,
    alert::{LOW_BATTERY_LEVEL, SOLAR_DROP_PERCENT, drop_percent},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_readings_table(series: &[EnergyReading]) -> Table {
    // The first reading has nothing to compare against:
    let solar_changes = std::iter::once(None).chain(
        series
            .iter()
            .tuple_windows()
            .map(|(previous, next)| drop_percent(previous.solar_output, next.solar_output)),
    );

    let mut table = new_table();
    table.set_header(vec![
        "Date",
        "Time",
        "Solar output",
        "Solar change",
        "Battery level",
        "Diesel usage",
    ]);
    for (reading, solar_drop) in series.iter().zip(solar_changes) {
        let timestamp = reading.timestamp.with_timezone(&Local);
        table.add_row(vec![
            Cell::new(timestamp.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(timestamp.format("%H:%M:%S")),
            Cell::new(reading.solar_output).set_alignment(CellAlignment::Right),
            match solar_drop {
                Some(drop) => Cell::new(format!("{:+.1}%", -drop))
                    .fg(if drop > SOLAR_DROP_PERCENT { Color::Red } else { Color::Reset }),
                None => Cell::new("–").add_attribute(Attribute::Dim),
            }
            .set_alignment(CellAlignment::Right),
            Cell::new(reading.battery_level).set_alignment(CellAlignment::Right).fg(
                if reading.battery_level < LOW_BATTERY_LEVEL { Color::Red } else { Color::Green },
            ),
            Cell::new(reading.diesel_usage).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_averages_table(averages: &MetricSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Average"]);
    for entry in averages.iter() {
        table.add_row(vec![
            Cell::new(entry.name).fg(entry.metric.color()),
            Cell::new(format!("{:.2}", entry.value)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[expect(clippy::float_cmp)]
pub fn build_distribution_table(distribution: &MetricSummary) -> Table {
    let total = distribution.total();

    let mut table = new_table();
    table.set_header(vec!["Source", "Total", "Share"]);
    for entry in distribution.iter() {
        let share = if total == 0.0 {
            Cell::new("n/a").add_attribute(Attribute::Dim)
        } else {
            Cell::new(format!("{:.1}%", entry.value / total * 100.0))
        };
        table.add_row(vec![
            Cell::new(entry.name).fg(entry.metric.color()),
            Cell::new(format!("{:.2}", entry.value)).set_alignment(CellAlignment::Right),
            share.set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_alerts_table(alerts: EnumSet<Alert>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Alert"]);
    for alert in alerts {
        table.add_row(vec![Cell::new(format!("⚠️ {alert}")).fg(Color::Red)]);
    }
    table
}
