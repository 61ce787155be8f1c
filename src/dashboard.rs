use crate::{
    core::{EnergyReading, Metric, averages, distribution, evaluate},
    prelude::*,
    tables::{
        build_alerts_table,
        build_averages_table,
        build_distribution_table,
        build_readings_table,
    },
};

/// Run the analytics over one snapshot of the series and print the dashboard.
///
/// Every call starts from scratch: nothing is remembered between snapshots.
#[instrument(skip_all, fields(n_readings = series.len()))]
pub fn render(series: &[EnergyReading]) {
    if series.is_empty() {
        warn!("no readings to show");
        return;
    }

    let averages = averages(series);
    debug!(
        solar = averages.get(Metric::Solar),
        battery = averages.get(Metric::Battery),
        diesel = averages.get(Metric::Diesel),
        "averages",
    );
    let alerts = evaluate(series);

    println!("{}", build_readings_table(series));
    println!("{}", build_averages_table(&averages));
    println!("{}", build_distribution_table(&distribution(series)));

    if alerts.is_empty() {
        info!("all clear");
    } else {
        for alert in alerts {
            warn!(?alert, "{alert}");
        }
        println!("{}", build_alerts_table(alerts));
    }
}
