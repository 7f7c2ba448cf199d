use crate::config::ConverterConfig;
use crate::core::browser::{default_navigator, DefaultNavigator};
use crate::core::classifier::classify;
use crate::core::extractor::{extract_page_point, extract_point, extract_query_point};
use crate::core::page::HttpPageFetcher;
use crate::core::unshorten::HttpUnshortener;
use crate::core::{ConfigProvider, PageFetcher, PageNavigator, Unshortener};
use crate::domain::model::{Coordinates, FailureReason, PointSource, Resolution};
use crate::utils::error::Result;

/// Runs a URL through classify → unshorten → extract → browser fallback,
/// with optional query-parameter and page-body stages before the browser.
pub struct MapPointConverter<U: Unshortener, N: PageNavigator> {
    unshortener: U,
    navigator: N,
    page_fetcher: Option<Box<dyn PageFetcher>>,
    browser_enabled: bool,
    query_fallback: bool,
}

impl MapPointConverter<HttpUnshortener, DefaultNavigator> {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut converter =
            MapPointConverter::new(HttpUnshortener::new(config)?, default_navigator(config))
                .with_browser(config.browser_enabled())
                .with_query_fallback(config.query_fallback());
        if config.page_scan() {
            converter = converter.with_page_fetcher(HttpPageFetcher::new(config)?);
        }
        Ok(converter)
    }
}

impl<U: Unshortener, N: PageNavigator> MapPointConverter<U, N> {
    pub fn new(unshortener: U, navigator: N) -> Self {
        Self {
            unshortener,
            navigator,
            page_fetcher: None,
            browser_enabled: true,
            query_fallback: false,
        }
    }

    /// Enables the page-body scan that runs before the browser.
    pub fn with_page_fetcher(mut self, fetcher: impl PageFetcher + 'static) -> Self {
        self.page_fetcher = Some(Box::new(fetcher));
        self
    }

    pub fn with_browser(mut self, enabled: bool) -> Self {
        self.browser_enabled = enabled;
        self
    }

    pub fn with_query_fallback(mut self, enabled: bool) -> Self {
        self.query_fallback = enabled;
        self
    }

    /// Resolves `url` and reports how it went. Never fails; every stage
    /// error is folded into the returned `Resolution`.
    pub async fn resolve(&self, url: &str) -> Resolution {
        let Some(shape) = classify(url) else {
            tracing::debug!("Not a Google Maps URL: {}", url);
            return Resolution::NotMapsUrl;
        };
        tracing::debug!("Classified {} as {:?}", url, shape);

        let resolved_url = self.unshortener.unshorten(url).await;
        tracing::info!("Unshortened URL: {}", resolved_url);

        if let Some(point) = extract_point(&resolved_url) {
            return Resolution::Resolved {
                point,
                resolved_url,
                source: PointSource::ResolvedUrl,
            };
        }

        if self.query_fallback {
            if let Some(point) = extract_query_point(&resolved_url) {
                return Resolution::Resolved {
                    point,
                    resolved_url,
                    source: PointSource::QueryParameter,
                };
            }
        }

        if let Some(fetcher) = &self.page_fetcher {
            match fetcher.fetch_page(&resolved_url).await {
                Ok(page) => {
                    if let Some(point) = extract_page_point(&page.body) {
                        return Resolution::Resolved {
                            point,
                            resolved_url: page.final_url,
                            source: PointSource::PageBody,
                        };
                    }
                    tracing::debug!("No preview/place link in page {}", page.final_url);
                }
                Err(e) => {
                    tracing::warn!(
                        "Error fetching page {} ({:?}): {}",
                        resolved_url,
                        e.category(),
                        e
                    );
                }
            }
        }

        if !self.browser_enabled {
            return Resolution::Unresolvable {
                resolved_url,
                reason: FailureReason::BrowserDisabled,
            };
        }

        let final_url = match self.navigator.settled_url(&resolved_url).await {
            Ok(final_url) => final_url,
            Err(e) => {
                tracing::warn!(
                    "Error using browser on {} ({:?}): {}",
                    resolved_url,
                    e.category(),
                    e
                );
                return Resolution::Unresolvable {
                    resolved_url,
                    reason: FailureReason::BrowserFailed {
                        message: e.to_string(),
                    },
                };
            }
        };
        tracing::info!("Final URL from browser: {}", final_url);

        if final_url == resolved_url {
            return Resolution::Unresolvable {
                resolved_url,
                reason: FailureReason::BrowserUnchanged,
            };
        }

        match extract_point(&final_url) {
            Some(point) => Resolution::Resolved {
                point,
                resolved_url: final_url,
                source: PointSource::Browser,
            },
            None => Resolution::Unresolvable {
                resolved_url,
                reason: FailureReason::NoCoordinates { final_url },
            },
        }
    }

    pub async fn convert(&self, url: &str) -> Coordinates {
        let resolution = self.resolve(url).await;
        if let Resolution::Unresolvable { resolved_url, reason } = &resolution {
            tracing::warn!("Could not resolve {} (via {}): {}", url, resolved_url, reason);
        }
        resolution.coordinates()
    }
}

/// Converts a Google Maps URL to coordinates with the default configuration.
///
/// Always returns a value; `{latitude: null, longitude: null}` means the URL
/// was not a maps URL or could not be resolved.
pub async fn convert_map_url_to_point(url: &str) -> Coordinates {
    match MapPointConverter::from_config(&ConverterConfig::default()) {
        Ok(converter) => converter.convert(url).await,
        Err(e) => {
            tracing::error!("Error processing URL {} ({:?}): {}", url, e.category(), e);
            Coordinates::unresolved()
        }
    }
}
