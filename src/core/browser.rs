use crate::domain::ports::PageNavigator;
use crate::utils::error::{GmapsError, Result};
use async_trait::async_trait;

#[cfg(feature = "browser")]
pub use chrome::ChromeNavigator;

/// Navigator used when the crate is built without the `browser` feature.
#[derive(Debug, Clone, Default)]
pub struct UnavailableNavigator;

#[async_trait]
impl PageNavigator for UnavailableNavigator {
    async fn settled_url(&self, _url: &str) -> Result<String> {
        Err(GmapsError::browser("browser support not compiled in"))
    }
}

#[cfg(feature = "browser")]
pub type DefaultNavigator = ChromeNavigator;
#[cfg(not(feature = "browser"))]
pub type DefaultNavigator = UnavailableNavigator;

#[cfg(feature = "browser")]
pub fn default_navigator<C: crate::core::ConfigProvider + ?Sized>(config: &C) -> DefaultNavigator {
    ChromeNavigator::new(config)
}

#[cfg(not(feature = "browser"))]
pub fn default_navigator<C: crate::core::ConfigProvider + ?Sized>(_config: &C) -> DefaultNavigator {
    UnavailableNavigator
}

#[cfg(feature = "browser")]
mod chrome {
    use crate::domain::ports::{ConfigProvider, PageNavigator};
    use crate::utils::error::{GmapsError, Result};
    use async_trait::async_trait;
    use chromiumoxide::browser::{Browser, BrowserConfig};
    use futures_util::StreamExt;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Launches a fresh headless Chrome per lookup and tears it down afterwards.
    #[derive(Debug, Clone)]
    pub struct ChromeNavigator {
        wait: Duration,
        request_timeout: Duration,
        executable: Option<String>,
    }

    impl ChromeNavigator {
        pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Self {
            Self {
                wait: config.browser_wait(),
                request_timeout: config.browser_timeout(),
                executable: config.chrome_executable().map(str::to_string),
            }
        }

        /// Builds a launch config with a throwaway profile directory. The
        /// directory is removed when the returned `TempDir` drops.
        pub(crate) fn launch_config(&self) -> Result<(BrowserConfig, TempDir)> {
            let profile = tempfile::Builder::new()
                .prefix("gmaps-point-chrome-")
                .tempdir()
                .map_err(|e| GmapsError::browser(format!("cannot create profile dir: {}", e)))?;

            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .arg("--disable-setuid-sandbox")
                .user_data_dir(profile.path())
                .request_timeout(self.request_timeout);
            if let Some(path) = &self.executable {
                builder = builder.chrome_executable(path);
            }
            let config = builder.build().map_err(GmapsError::browser)?;
            Ok((config, profile))
        }

        async fn navigate(&self, browser: &Browser, url: &str) -> Result<String> {
            let page = browser.new_page(url).await.map_err(GmapsError::browser)?;
            page.wait_for_navigation()
                .await
                .map_err(GmapsError::browser)?;

            // Client-side redirects keep rewriting the address after load.
            tokio::time::sleep(self.wait).await;

            let final_url = page
                .url()
                .await
                .map_err(GmapsError::browser)?
                .ok_or_else(|| GmapsError::browser("page reported no URL"))?;

            if let Err(e) = page.close().await {
                tracing::debug!("Failed to close page: {}", e);
            }
            Ok(final_url)
        }
    }

    #[async_trait]
    impl PageNavigator for ChromeNavigator {
        async fn settled_url(&self, url: &str) -> Result<String> {
            let (config, profile) = self.launch_config()?;
            let (mut browser, mut handler) = Browser::launch(config)
                .await
                .map_err(GmapsError::browser)?;

            let handler_task = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if let Err(e) = event {
                        tracing::debug!("DevTools handler error: {}", e);
                    }
                }
            });

            let outcome = self.navigate(&browser, url).await;

            // Teardown runs whatever the navigation outcome was.
            if let Err(e) = browser.close().await {
                tracing::warn!("Failed to close browser: {}", e);
            }
            if let Err(e) = browser.wait().await {
                tracing::warn!("Failed to reap browser process: {}", e);
            }
            handler_task.abort();
            // Chrome has exited; the profile can go.
            drop(profile);

            outcome
        }
    }
}
