use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use chrono::{DateTime, TimeDelta, Utc};
use clap::Parser;

use crate::{core::Series, prelude::*, simulator::Simulator};

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of readings to generate.
    #[clap(long, short = 'n', default_value = "50")]
    count: usize,

    /// Random seed for reproducible output.
    #[clap(long, env = "SIMULATOR_SEED")]
    seed: Option<u64>,

    /// Timestamp of the first reading, now by default.
    #[clap(long)]
    start: Option<DateTime<Utc>>,

    /// Time between consecutive readings.
    #[clap(long, default_value = "5s")]
    interval: humantime::Duration,

    /// Output file, the standard output by default.
    #[clap(long, short)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn run(self) -> Result {
        let interval =
            TimeDelta::from_std(self.interval.into()).context("the interval is too long")?;
        let series: Series = Simulator::builder()
            .maybe_start(self.start)
            .interval(interval)
            .maybe_rng(self.seed)
            .build()
            .readings()
            .take(self.count)
            .collect();

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create `{}`", path.display()))?;
                write_series(BufWriter::new(file), &series)?;
                info!(path = %path.display(), n_readings = series.len(), "written");
            }
            None => {
                write_series(io::stdout().lock(), &series)?;
            }
        }
        Ok(())
    }
}

fn write_series(mut writer: impl Write, series: &Series) -> Result {
    serde_json::to_writer_pretty(&mut writer, series)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
