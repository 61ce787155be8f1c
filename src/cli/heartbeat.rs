use std::time::Duration;

use clap::Parser;
use reqwest::{Client, Url};

use crate::prelude::*;

#[derive(Default, Parser)]
pub struct HeartbeatArgs {
    /// Uptime monitor to POST to once the dashboard has been printed.
    #[clap(long = "heartbeat-url", env = "HEARTBEAT_URL")]
    url: Option<Url>,
}

impl HeartbeatArgs {
    /// Ping the uptime monitor, if one is configured.
    ///
    /// The dashboard has already been shown by then, so errors end up in the log only.
    pub async fn send(&self) {
        let Some(url) = &self.url else {
            return;
        };
        if let Err(error) = Self::ping(url.clone()).await {
            warn!("the uptime monitor did not accept the ping: {error:#}");
        }
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn ping(url: Url) -> Result {
        debug!("pinging the uptime monitor…");
        Client::builder()
            .timeout(Duration::from_secs(3))
            .build()?
            .post(url)
            .send()
            .await
            .context("the uptime monitor is unreachable")?
            .error_for_status()
            .context("the uptime monitor rejected the ping")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_without_url_is_noop() {
        HeartbeatArgs::default().send().await;
    }

    #[tokio::test]
    async fn test_send_failure_is_swallowed() -> Result {
        // Nothing listens on the discard port:
        HeartbeatArgs { url: Some(Url::parse("http://127.0.0.1:9/")?) }.send().await;
        Ok(())
    }
}
