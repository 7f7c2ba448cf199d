use crate::domain::model::FetchedPage;
use crate::domain::ports::{ConfigProvider, PageFetcher};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};

/// GETs a page with the client following redirects itself, so the body is
/// whatever the last hop served.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder()
            .redirect(Policy::limited(config.max_redirects()))
            .user_agent(config.user_agent());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("GET {} -> {} ({})", url, response.url(), response.status());

        let final_url = response.url().to_string();
        let body = response.text().await?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage { final_url, body })
    }
}
