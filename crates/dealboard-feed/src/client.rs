//! HTTP client for the grocery offers endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::FeedError;
use crate::types::StoreFeed;

/// HTTP client for the offers endpoint.
///
/// One `GET` per call, no retries. Non-2xx responses and malformed bodies
/// come back as typed errors; the caller decides what to keep on screen.
pub struct OffersClient {
    client: Client,
    api_url: String,
}

impl OffersClient {
    /// Creates an `OffersClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `api_url` is not an absolute URL,
    /// or [`FeedError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(api_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        // Validate once up front so every fetch can assume a good base.
        Self::offers_url(api_url, true)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.to_owned(),
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches every store's product list.
    ///
    /// With `offers_only` the endpoint is asked for discounted products only.
    ///
    /// # Errors
    ///
    /// - [`FeedError::NotFound`]: HTTP 404.
    /// - [`FeedError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`FeedError::Http`]: network, TLS or timeout failure.
    /// - [`FeedError::Deserialize`]: body is not a JSON array of store feeds.
    pub async fn fetch_feeds(&self, offers_only: bool) -> Result<Vec<StoreFeed>, FeedError> {
        let url = Self::offers_url(&self.api_url, offers_only)?;

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FeedError::NotFound { url });
        }

        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let feeds = serde_json::from_str::<Vec<StoreFeed>>(&body).map_err(|e| {
            FeedError::Deserialize {
                context: format!("offers from {url}"),
                source: e,
            }
        })?;

        tracing::debug!(
            url = %url,
            stores = feeds.len(),
            products = feeds.iter().map(|f| f.products.len()).sum::<usize>(),
            "fetched store feeds"
        );

        Ok(feeds)
    }

    /// Builds the request URL: `api_url` with an `offers=<bool>` query pair
    /// appended to any existing query.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `api_url` cannot be parsed.
    fn offers_url(api_url: &str, offers_only: bool) -> Result<String, FeedError> {
        let mut url = reqwest::Url::parse(api_url).map_err(|e| FeedError::InvalidUrl {
            url: api_url.to_owned(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("offers", if offers_only { "true" } else { "false" });

        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
