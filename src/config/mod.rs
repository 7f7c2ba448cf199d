#[cfg(feature = "cli")]
pub mod cli;

use crate::core::unshorten::{DEFAULT_MAX_REDIRECTS, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_executable_path, validate_min_duration, validate_non_empty_string, validate_range,
    Validate,
};
use std::time::Duration;

pub const DEFAULT_BROWSER_WAIT_MS: u64 = 3000;
pub const DEFAULT_BROWSER_TIMEOUT_SECS: u64 = 30;
pub const MAX_REDIRECTS_LIMIT: usize = 100;
pub const MAX_BROWSER_WAIT_MS: u64 = 60_000;
pub const MIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Library-side configuration. `Default` reproduces the stock pipeline.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub user_agent: String,
    pub max_redirects: usize,
    pub request_timeout: Option<Duration>,
    pub browser_enabled: bool,
    pub browser_wait: Duration,
    pub browser_timeout: Duration,
    pub chrome_executable: Option<String>,
    pub query_fallback: bool,
    pub page_scan: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            request_timeout: None,
            browser_enabled: true,
            browser_wait: Duration::from_millis(DEFAULT_BROWSER_WAIT_MS),
            browser_timeout: Duration::from_secs(DEFAULT_BROWSER_TIMEOUT_SECS),
            chrome_executable: None,
            query_fallback: false,
            page_scan: false,
        }
    }
}

impl ConfigProvider for ConverterConfig {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    fn browser_enabled(&self) -> bool {
        self.browser_enabled
    }

    fn browser_wait(&self) -> Duration {
        self.browser_wait
    }

    fn browser_timeout(&self) -> Duration {
        self.browser_timeout
    }

    fn chrome_executable(&self) -> Option<&str> {
        self.chrome_executable.as_deref()
    }

    fn query_fallback(&self) -> bool {
        self.query_fallback
    }

    fn page_scan(&self) -> bool {
        self.page_scan
    }
}

/// Shared checks for any `ConfigProvider`.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_non_empty_string("user_agent", config.user_agent())?;
    validate_range("max_redirects", config.max_redirects(), 0, MAX_REDIRECTS_LIMIT)?;
    if let Some(timeout) = config.request_timeout() {
        validate_min_duration("request_timeout", timeout, MIN_TIMEOUT)?;
    }
    validate_range(
        "browser_wait_ms",
        config.browser_wait().as_millis() as u64,
        0,
        MAX_BROWSER_WAIT_MS,
    )?;
    validate_min_duration("browser_timeout", config.browser_timeout(), MIN_TIMEOUT)?;
    if let Some(path) = config.chrome_executable() {
        validate_executable_path("chrome", path)?;
    }
    Ok(())
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
