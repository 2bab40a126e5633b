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

//! Localized display strings embedded in the page.

use log::warn;

use crate::page::{Page, LINK_SPEED_ID, LINK_STATE_ID};
use crate::protocol::Speed;

pub const DEFAULT_UP_LABEL: &str = "Up";
pub const DEFAULT_DOWN_LABEL: &str = "Down";
pub const DEFAULT_SPEED_SUFFIX: &str = "Mbps";

/// Link state labels and the speed unit suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedLabels {
    pub up: String,
    pub down: String,
    pub speed_suffix: String,
}

impl LocalizedLabels {
    #[must_use]
    pub fn new(up: impl Into<String>, down: impl Into<String>, speed_suffix: impl Into<String>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
            speed_suffix: speed_suffix.into(),
        }
    }

    /// Read labels from the page's `data-up`/`data-down` and `data-mbps`
    /// attributes, falling back to the English defaults for any that are absent.
    pub fn from_page<P: Page + ?Sized>(page: &P) -> Self {
        Self {
            up: read_label(page, LINK_STATE_ID, "up", DEFAULT_UP_LABEL),
            down: read_label(page, LINK_STATE_ID, "down", DEFAULT_DOWN_LABEL),
            speed_suffix: read_label(page, LINK_SPEED_ID, "mbps", DEFAULT_SPEED_SUFFIX),
        }
    }

    /// Label for a link flag: `down` for 0, `up` for anything else.
    #[must_use]
    pub fn link_label(&self, link: i64) -> &str {
        if link == 0 {
            &self.down
        } else {
            &self.up
        }
    }

    /// Speed followed by a single space and the unit suffix.
    #[must_use]
    pub fn speed_text(&self, speed: &Speed) -> String {
        format!("{} {}", speed, self.speed_suffix)
    }
}

impl Default for LocalizedLabels {
    fn default() -> Self {
        Self::new(DEFAULT_UP_LABEL, DEFAULT_DOWN_LABEL, DEFAULT_SPEED_SUFFIX)
    }
}

fn read_label<P: Page + ?Sized>(page: &P, id: &str, key: &str, fallback: &str) -> String {
    page.data_attribute(id, key).unwrap_or_else(|| {
        warn!("Missing data-{} on #{}, using \"{}\"", key, id, fallback);
        fallback.to_string()
    })
}
