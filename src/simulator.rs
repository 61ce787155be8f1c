//! Random readings in the ranges the production generator uses, for demos and offline runs.

use bon::Builder;
use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    core::EnergyReading,
    quantity::{fuel::LitresPerHour, percentage::Percentage, power::Kilowatts},
};

#[derive(Builder)]
pub struct Simulator {
    /// Timestamp of the first reading.
    #[builder(default = Utc::now())]
    start: DateTime<Utc>,

    /// Time between consecutive readings.
    #[builder(default = TimeDelta::seconds(5))]
    interval: TimeDelta,

    /// Fixed seed for reproducible output, or OS entropy otherwise.
    #[builder(with = |seed: u64| StdRng::seed_from_u64(seed))]
    rng: Option<StdRng>,
}

impl Simulator {
    /// Infinite stream of readings, spaced by the interval.
    pub fn readings(self) -> impl Iterator<Item = EnergyReading> {
        let mut rng = self.rng.unwrap_or_else(StdRng::from_os_rng);
        let mut timestamp = self.start;
        let interval = self.interval;
        std::iter::from_fn(move || {
            let reading = EnergyReading::builder()
                .timestamp(timestamp)
                .solar_output(Kilowatts(uniform(&mut rng, 5.0, 50.0)))
                .battery_level(Percentage(uniform(&mut rng, 20.0, 100.0)))
                .diesel_usage(LitresPerHour(uniform(&mut rng, 0.0, 5.0)))
                .build();
            timestamp += interval;
            Some(reading)
        })
    }
}

/// Uniform sample rounded to two decimals.
fn uniform(rng: &mut impl Rng, low: f64, high: f64) -> f64 {
    (rng.random_range(low..=high) * 100.0).round() / 100.0
}
