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

//! Network status client: polls a status endpoint and writes interface state
//! into page elements.
//!
//! The library is split into small layers that can be used on their own:
//!
//! - **Protocol**: the `StatusDocument` JSON model
//! - **Page**: element access through the [`Page`] trait, with an in-memory
//!   implementation
//! - **Labels**: the localized up/down strings and speed unit read from the page
//! - **Fetch**: the [`StatusFetcher`] trait and an HTTP implementation
//! - **Poller**: the timer that ties them together
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use netstatus_client::{FetcherConfig, HttpFetcher, MemoryPage, PollerConfig, StatusPoller};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let page = Arc::new(
//!         MemoryPage::builder()
//!             .element("network_status")
//!             .data("network_link_state", "up", "Up")
//!             .data("network_link_state", "down", "Down")
//!             .data("network_link_speed", "mbps", "Mbps")
//!             .element("eth0_mac")
//!             .element("eth0_link")
//!             .element("eth0_speed")
//!             .element("eth0_order")
//!             .build(),
//!     );
//!
//!     let fetcher = HttpFetcher::new(FetcherConfig {
//!         base_url: "http://192.168.1.1".to_string(),
//!         ..Default::default()
//!     })?;
//!
//!     let mut poller = StatusPoller::new(fetcher, Arc::clone(&page), PollerConfig::default());
//!     poller.start();
//!
//!     loop {
//!         tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!         println!("eth0: {:?}", page.text("eth0_link"));
//!     }
//! }
//! ```
//!
//! # Applying a Document Directly
//!
//! ```
//! use netstatus_client::{apply_document, parse_document, LocalizedLabels, MemoryPage};
//!
//! let page = MemoryPage::builder().element("eth0_speed").build();
//! let doc = parse_document(
//!     br#"{"networks":[{"name":"eth0","mac":"AA:BB:CC:DD:EE:FF","link":1,"speed":1000,"order":1}]}"#,
//! )
//! .unwrap();
//!
//! let report = apply_document(&page, &LocalizedLabels::default(), &doc);
//! assert_eq!(page.text("eth0_speed").as_deref(), Some("1000 Mbps"));
//! assert_eq!(report.missing_elements.len(), 3);
//! ```

pub mod fetch;
pub mod labels;
pub mod page;
pub mod poller;
pub mod protocol;

pub use fetch::{FetchError, FetcherConfig, HttpFetcher, StatusFetcher};
pub use labels::LocalizedLabels;
pub use page::{MemoryPage, MemoryPageBuilder, NetworkElements, Page, PageError};
pub use poller::{apply_document, ApplyReport, PollerConfig, PollerState, PollerStats, StatusPoller};
pub use protocol::{parse_document, NetworkEntry, ProtocolError, Speed, StatusDocument};
