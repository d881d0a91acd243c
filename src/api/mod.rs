//! Concrete HTTP data source for the list loader.
//!
//! Fetches users from a REST endpoint (`GET {base_url}/users?_limit=N`),
//! the shape served by jsonplaceholder-style fixtures. Transport failures,
//! non-2xx statuses, and undecodable bodies are all mapped into
//! [`FetchError`]; the loader turns those into its `Error` phase.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::loader::{FetchError, ItemFetcher};

/// A user record as served by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// [`ItemFetcher`] backed by an HTTP users endpoint.
///
/// The param is a result limit, forwarded as the `_limit` query parameter.
pub struct HttpItemFetcher {
    client: Client,
    base_url: String,
}

impl HttpItemFetcher {
    /// Build a fetcher for `base_url` with the given timeouts.
    pub fn new(base_url: &str, connect_timeout: Duration, request_timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a fetcher from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            &config.base_url,
            Duration::from_secs(u64::from(config.connect_timeout_seconds)),
            Duration::from_secs(u64::from(config.timeout_seconds)),
        )
    }
}

impl ItemFetcher for HttpItemFetcher {
    type Param = u32;
    type Item = User;

    fn fetch_items(
        &self,
        limit: &u32,
    ) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send {
        let url = format!("{}/users?_limit={}", self.base_url, limit);
        async move {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }

            response
                .json::<Vec<User>>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        }
    }
}
