use std::{future::Future, io, time::Duration};

use clap::Parser;
use tokio::{
    signal,
    time::{Interval, MissedTickBehavior, interval},
};

use crate::{
    api::telemetry,
    cli::{api::ApiArgs, heartbeat::HeartbeatArgs},
    dashboard,
    prelude::*,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    api: ApiArgs,

    #[clap(flatten)]
    heartbeat: HeartbeatArgs,

    /// Time between consecutive polls.
    #[clap(long = "interval", env = "POLLING_INTERVAL", default_value = "1min")]
    polling_interval: humantime::Duration,
}

impl WatchArgs {
    /// Poll until interrupted, every snapshot is analysed independently of the previous ones.
    pub async fn run(self) -> Result {
        let client = self.api.new_client()?;
        let period: Duration = self.polling_interval.into();
        ensure!(!period.is_zero(), "the polling interval must be positive");
        watch(&client, &self.heartbeat, period, signal::ctrl_c()).await
    }
}

/// Poll until `shutdown` resolves, which also cancels an in-flight fetch.
async fn watch(
    client: &telemetry::Client,
    heartbeat: &HeartbeatArgs,
    period: Duration,
    shutdown: impl Future<Output = io::Result<()>>,
) -> Result {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            result = &mut shutdown => {
                result.context("failed to listen for Ctrl-C")?;
                info!("interrupted");
                return Ok(());
            }
            () = poll(client, heartbeat, &mut ticker) => {}
        }
    }
}

async fn poll(client: &telemetry::Client, heartbeat: &HeartbeatArgs, ticker: &mut Interval) {
    ticker.tick().await;

    // Keep polling after a failed fetch:
    match client.get_readings().await {
        Ok(series) => {
            dashboard::render(&series);
            heartbeat.send().await;
        }
        Err(error) => {
            warn!("failed to fetch the readings: {error:#}");
        }
    }
}
