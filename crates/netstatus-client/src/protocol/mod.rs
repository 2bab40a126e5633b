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

//! Status document model and decoding.
//!
//! The status endpoint returns a JSON object with a `networks` array. Each
//! element describes one interface as observed at fetch time; nothing is kept
//! between fetches.

mod speed;

pub use speed::Speed;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while decoding a status document.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid status document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// The payload returned by the status endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusDocument {
    /// Interfaces in the order the endpoint reported them.
    pub networks: Vec<NetworkEntry>,
}

/// One network interface's observed state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkEntry {
    /// Interface name (e.g., "eth0"); element ids are derived from it.
    pub name: String,
    /// Hardware address.
    pub mac: String,
    /// Link flag: 0 = down, anything else = up.
    pub link: i64,
    /// Link speed, as reported.
    pub speed: Speed,
    /// Display/sort hint.
    pub order: i64,
}

impl NetworkEntry {
    /// Whether the link flag reports the interface as up.
    #[must_use]
    pub fn is_link_up(&self) -> bool {
        self.link != 0
    }
}

/// Decode a status document from a response body.
pub fn parse_document(body: &[u8]) -> Result<StatusDocument, ProtocolError> {
    Ok(serde_json::from_slice(body)?)
}
