use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use clap::Parser;

use crate::{core::Series, dashboard, prelude::*};

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// JSON array of readings in the API format, `-` reads the standard input.
    #[clap(long, short, default_value = "-")]
    input: PathBuf,
}

impl AnalyzeArgs {
    pub fn run(self) -> Result {
        let series = read_series(&self.input)?;
        info!(n_readings = series.len(), "loaded");
        dashboard::render(&series);
        Ok(())
    }
}

#[instrument(skip_all, fields(path = %path.display()))]
fn read_series(path: &Path) -> Result<Series> {
    let series: serde_json::Result<Series> = if path == Path::new("-") {
        serde_json::from_reader(io::stdin().lock())
    } else {
        let file = File::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
    };
    series.with_context(|| format!("failed to read the readings from `{}`", path.display()))
}
