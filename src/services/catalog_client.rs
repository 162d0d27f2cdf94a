use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use url::Url;

use crate::configuration::CatalogSettings;

pub struct CatalogClient {
    client: Client,
    url: Url,
}

impl CatalogClient {
    pub fn new(settings: CatalogSettings) -> anyhow::Result<Self> {
        let url = Url::parse(&settings.url)
            .with_context(|| format!("Invalid catalog url: {}", settings.url))?;

        let client = Client::builder()
            .read_timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(CatalogClient { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn fetch_page(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}
