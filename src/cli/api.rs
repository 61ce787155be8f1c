use clap::Parser;
use reqwest::Url;

use crate::{api::telemetry, prelude::*};

#[derive(Parser)]
pub struct ApiArgs {
    /// Telemetry API base URL, the readings are listed under `energy/`.
    #[clap(
        long = "api-base-url",
        env = "ENERGY_API_BASE_URL",
        default_value = "http://127.0.0.1:8000/api"
    )]
    base_url: Url,
}

impl ApiArgs {
    pub fn new_client(&self) -> Result<telemetry::Client> {
        telemetry::Client::new(&self.base_url)
    }
}
