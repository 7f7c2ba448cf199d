use crate::domain::model::FetchedPage;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn user_agent(&self) -> &str;
    fn max_redirects(&self) -> usize;
    fn request_timeout(&self) -> Option<Duration>;
    fn browser_enabled(&self) -> bool;
    fn browser_wait(&self) -> Duration;
    fn browser_timeout(&self) -> Duration;
    fn chrome_executable(&self) -> Option<&str>;
    fn query_fallback(&self) -> bool;
    fn page_scan(&self) -> bool;
}

/// Follows redirect hops until a final URL is reached. Never fails.
#[async_trait]
pub trait Unshortener: Send + Sync {
    async fn unshorten(&self, url: &str) -> String;
}

/// Opens a URL in a real browser and reports where the page settled.
#[async_trait]
pub trait PageNavigator: Send + Sync {
    async fn settled_url(&self, url: &str) -> Result<String>;
}

/// Downloads a page, following redirects, for body scanning.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage>;
}
