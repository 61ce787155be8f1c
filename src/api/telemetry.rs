//! Client of the telemetry REST API, which lists the latest readings newest-first.

use std::time::Duration;

use reqwest::Url;

use crate::{core::Series, prelude::*};

pub struct Client {
    inner: reqwest::Client,
    url: Url,
}

impl Client {
    /// Build a client for the `energy/` endpoint under the API base URL.
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: &Url) -> Result<Self> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("`{base_url}` cannot be a base URL"))?
            .pop_if_empty()
            .push("energy")
            .push("");
        let inner = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { inner, url })
    }

    /// Fetch the readings, dropping malformed ones and ordering the rest chronologically.
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn get_readings(&self) -> Result<Series> {
        let series: Series = self
            .inner
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("failed to request the readings from `{}`", self.url))?
            .error_for_status()
            .with_context(|| format!("`{}` responded with an error", self.url))?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{}`", self.url))?;
        info!(n_readings = series.len(), "fetched");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_trailing_slash() -> Result {
        let client = Client::new(&Url::parse("http://127.0.0.1:8000/api")?)?;
        assert_eq!(client.url.as_str(), "http://127.0.0.1:8000/api/energy/");
        Ok(())
    }

    #[test]
    fn test_url_with_trailing_slash() -> Result {
        let client = Client::new(&Url::parse("http://127.0.0.1:8000/api/")?)?;
        assert_eq!(client.url.as_str(), "http://127.0.0.1:8000/api/energy/");
        Ok(())
    }

    #[test]
    fn test_url_root() -> Result {
        let client = Client::new(&Url::parse("https://telemetry.example.com")?)?;
        assert_eq!(client.url.as_str(), "https://telemetry.example.com/energy/");
        Ok(())
    }

    #[test]
    fn test_url_cannot_be_a_base_err() -> Result {
        assert!(Client::new(&Url::parse("mailto:ops@example.com")?).is_err());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_get_readings_ok() -> Result {
        let series =
            Client::new(&Url::parse("http://127.0.0.1:8000/api")?)?.get_readings().await?;
        assert!(series.is_sorted_by_key(|reading| reading.timestamp));
        Ok(())
    }
}
