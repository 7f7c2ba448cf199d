use super::{validate_provider, DEFAULT_BROWSER_TIMEOUT_SECS, DEFAULT_BROWSER_WAIT_MS};
use crate::core::unshorten::{DEFAULT_MAX_REDIRECTS, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "gmaps-point")]
#[command(about = "Extract latitude/longitude from Google Maps URLs, including shortened links")]
pub struct CliConfig {
    /// Google Maps URL to resolve
    pub url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    #[arg(long, help = "Per-request timeout for redirect resolution (no timeout when unset)")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, help = "Skip the headless browser fallback")]
    pub no_browser: bool,

    #[arg(long, default_value_t = DEFAULT_BROWSER_WAIT_MS)]
    pub browser_wait_ms: u64,

    #[arg(long, default_value_t = DEFAULT_BROWSER_TIMEOUT_SECS)]
    pub browser_timeout_secs: u64,

    #[arg(long, help = "Path to the Chrome/Chromium executable")]
    pub chrome: Option<String>,

    #[arg(long, help = "Also accept q=lat,lon query parameters before launching a browser")]
    pub query_fallback: bool,

    #[arg(long, help = "Scan the fetched page HTML for a preview/place link before launching a browser")]
    pub page_scan: bool,

    #[arg(long, help = "Print a Google Maps link for the resolved point")]
    pub link: bool,
}

impl ConfigProvider for CliConfig {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn browser_enabled(&self) -> bool {
        !self.no_browser
    }

    fn browser_wait(&self) -> Duration {
        Duration::from_millis(self.browser_wait_ms)
    }

    fn browser_timeout(&self) -> Duration {
        Duration::from_secs(self.browser_timeout_secs)
    }

    fn chrome_executable(&self) -> Option<&str> {
        self.chrome.as_deref()
    }

    fn query_fallback(&self) -> bool {
        self.query_fallback
    }

    fn page_scan(&self) -> bool {
        self.page_scan
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
