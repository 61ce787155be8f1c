use clap::Parser;

use crate::{
    cli::{api::ApiArgs, heartbeat::HeartbeatArgs},
    dashboard,
    prelude::*,
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    api: ApiArgs,

    #[clap(flatten)]
    heartbeat: HeartbeatArgs,
}

impl ReportArgs {
    pub async fn run(self) -> Result {
        let series = self.api.new_client()?.get_readings().await?;
        dashboard::render(&series);
        self.heartbeat.send().await;
        Ok(())
    }
}
