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

//! Status document retrieval.
//!
//! The poller depends only on the [`StatusFetcher`] trait, so the HTTP client
//! can be swapped for a test double or a different transport.

mod http;

pub use http::{FetcherConfig, HttpFetcher, DEFAULT_STATUS_PATH};

use std::future::Future;

use thiserror::Error;

use crate::protocol::{ProtocolError, StatusDocument};

/// Errors that can occur while fetching a status document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid status URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Decode(#[from] ProtocolError),
}

/// Source of status documents.
pub trait StatusFetcher: Send + Sync + 'static {
    /// Fetch the current status document.
    fn fetch(&self) -> impl Future<Output = Result<StatusDocument, FetchError>> + Send;
}
