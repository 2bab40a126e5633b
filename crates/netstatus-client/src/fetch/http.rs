// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP fetcher for `/status/network.json`.

use std::time::Duration;

use chrono::Utc;
use log::debug;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};

use super::{FetchError, StatusFetcher};
use crate::protocol::{parse_document, StatusDocument};

/// Default path of the status endpoint.
pub const DEFAULT_STATUS_PATH: &str = "/status/network.json";

// Query key appended with the current time so no cache can serve a stale body.
const CACHE_BUST_PARAM: &str = "_";

/// Configuration for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Scheme, host and port of the status server (e.g., `http://192.168.1.1`).
    pub base_url: String,
    /// Endpoint path, joined onto `base_url`.
    pub path: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Extra query parameter sent with every request. The endpoint ignores it.
    pub extra_param: Option<(String, String)>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            path: DEFAULT_STATUS_PATH.to_string(),
            timeout: Duration::from_secs(5),
            extra_param: Some(("get_param".to_string(), "value".to_string())),
        }
    }
}

/// Fetches status documents over HTTP with caching disabled.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: Url,
    extra_param: Option<(String, String)>,
}

impl HttpFetcher {
    /// Build a fetcher with its own HTTP client.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Self::with_client(config, client)
    }

    /// Build a fetcher on top of an existing HTTP client.
    ///
    /// `config.timeout` is not applied; the client's own settings are used.
    pub fn with_client(config: FetcherConfig, client: Client) -> Result<Self, FetchError> {
        let url = status_url(&config.base_url, &config.path)?;
        Ok(Self {
            client,
            url,
            extra_param: config.extra_param,
        })
    }

    /// The endpoint URL, without query parameters.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl StatusFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<StatusDocument, FetchError> {
        let mut request = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache");

        if let Some((key, value)) = &self.extra_param {
            request = request.query(&[(key, value)]);
        }
        let stamp = Utc::now().timestamp_millis().to_string();
        request = request.query(&[(CACHE_BUST_PARAM, stamp)]);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);

        Ok(parse_document(&body)?)
    }
}

fn status_url(base_url: &str, path: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: format!("{base_url}{path}"),
        reason,
    };

    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) base URL".to_string()));
    }
    base.join(path).map_err(|e| invalid(e.to_string()))
}
