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

//! Builds the status page the poller writes into.

use netstatus_client::page::{LINK_SPEED_ID, LINK_STATE_ID, NETWORK_STATUS_ID};
use netstatus_client::{MemoryPage, NetworkElements};

use crate::config::AppConfig;

/// Text shown in a cell before the first successful poll
pub const PLACEHOLDER: &str = "-";

/// Render the page: label carriers, the optional container, and one row of
/// elements per configured interface.
pub fn render(config: &AppConfig, with_container: bool) -> MemoryPage {
    let mut builder = MemoryPage::builder()
        .data(LINK_STATE_ID, "up", config.labels.up.as_str())
        .data(LINK_STATE_ID, "down", config.labels.down.as_str())
        .data(LINK_SPEED_ID, "mbps", config.labels.speed_suffix.as_str());

    if with_container {
        builder = builder.element(NETWORK_STATUS_ID);
    }

    for name in &config.interfaces {
        for id in NetworkElements::for_network(name).ids() {
            builder = builder.text(id, PLACEHOLDER);
        }
    }

    builder.build()
}
