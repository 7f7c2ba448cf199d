use crate::domain::ports::{ConfigProvider, Unshortener};
use crate::utils::error::{GmapsError, Result};
use async_trait::async_trait;
use reqwest::{header::LOCATION, redirect::Policy, Client};
use url::Url;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Follows HEAD redirects hop by hop, the HTTP client's own redirect handling
/// switched off so every `Location` is observed.
#[derive(Debug, Clone)]
pub struct HttpUnshortener {
    client: Client,
    max_redirects: usize,
}

impl HttpUnshortener {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder()
            .redirect(Policy::none())
            .user_agent(config.user_agent());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            max_redirects: config.max_redirects(),
        })
    }

    /// Issues one HEAD request. `Ok(Some(next))` when the response is a
    /// redirect, `Ok(None)` when `url` is final.
    async fn next_hop(&self, url: &str) -> Result<Option<String>> {
        let current = Url::parse(url)?;
        let response = self.client.head(current.clone()).send().await?;
        let status = response.status();

        tracing::debug!("HEAD {} -> {}", url, status);

        if !status.is_redirection() {
            return Ok(None);
        }

        let Some(location) = response.headers().get(LOCATION) else {
            return Ok(None);
        };
        let location = location
            .to_str()
            .map_err(|_| GmapsError::MissingRedirectTarget {
                url: url.to_string(),
                status: status.as_u16(),
            })?;

        // Location may be relative to the URL that issued it.
        let next = current.join(location)?;
        Ok(Some(next.to_string()))
    }
}

#[async_trait]
impl Unshortener for HttpUnshortener {
    async fn unshorten(&self, url: &str) -> String {
        let mut current = url.to_string();
        let mut hops = 0;

        loop {
            match self.next_hop(&current).await {
                Ok(Some(next)) => {
                    if hops >= self.max_redirects {
                        tracing::warn!(
                            "Redirect limit ({}) reached at {}, next hop {} not followed",
                            self.max_redirects,
                            current,
                            next
                        );
                        return current;
                    }
                    hops += 1;
                    tracing::debug!("Redirect hop {}: {} -> {}", hops, current, next);
                    current = next;
                }
                Ok(None) => return current,
                Err(e) => {
                    tracing::warn!(
                        "Error unshortening URL {} ({:?}): {}",
                        current,
                        e.category(),
                        e
                    );
                    return current;
                }
            }
        }
    }
}
