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

//! Page element access.
//!
//! The poller never builds markup; it only reads configuration attributes from
//! elements the host already rendered and overwrites the text of others. The
//! [`Page`] trait is that seam, and [`MemoryPage`] is an in-process
//! implementation used by the panel binary and by tests.

mod memory;

pub use memory::{MemoryPage, MemoryPageBuilder};

use thiserror::Error;

/// Container element whose presence activates polling.
pub const NETWORK_STATUS_ID: &str = "network_status";

/// Element carrying the `up`/`down` link labels as data attributes.
pub const LINK_STATE_ID: &str = "network_link_state";

/// Element carrying the speed unit suffix as its `mbps` data attribute.
pub const LINK_SPEED_ID: &str = "network_link_speed";

/// Errors returned by page element access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("element not found: #{0}")]
    ElementNotFound(String),
}

/// Access to the elements of a rendered page.
///
/// Implementations must be shareable across tasks: overlapping poll cycles
/// may write concurrently, and the last write to an element wins.
pub trait Page: Send + Sync {
    /// Whether an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Read a `data-*` attribute from an element.
    ///
    /// Returns `None` if either the element or the attribute is absent.
    fn data_attribute(&self, id: &str, key: &str) -> Option<String>;

    /// Overwrite an element's text content.
    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError>;
}

/// The four elements that display one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkElements {
    pub mac: String,
    pub link: String,
    pub speed: String,
    pub order: String,
}

impl NetworkElements {
    /// Element ids for the interface called `name`.
    #[must_use]
    pub fn for_network(name: &str) -> Self {
        Self {
            mac: format!("{name}_mac"),
            link: format!("{name}_link"),
            speed: format!("{name}_speed"),
            order: format!("{name}_order"),
        }
    }

    /// All ids, in mac/link/speed/order order.
    #[must_use]
    pub fn ids(&self) -> [&str; 4] {
        [&self.mac, &self.link, &self.speed, &self.order]
    }

    /// Ids that the page does not contain.
    pub fn missing_from<P: Page + ?Sized>(&self, page: &P) -> Vec<String> {
        self.ids()
            .into_iter()
            .filter(|id| !page.contains(id))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_elements_naming() {
        let elements = NetworkElements::for_network("eth0");
        assert_eq!(elements.ids(), ["eth0_mac", "eth0_link", "eth0_speed", "eth0_order"]);
    }

    #[test]
    fn test_missing_from() {
        let page = MemoryPage::builder()
            .element("eth0_mac")
            .element("eth0_speed")
            .build();

        let missing = NetworkElements::for_network("eth0").missing_from(&page);
        assert_eq!(missing, vec!["eth0_link".to_string(), "eth0_order".to_string()]);
    }

    #[test]
    fn test_page_error_display() {
        let err = PageError::ElementNotFound("eth9_mac".to_string());
        assert_eq!(err.to_string(), "element not found: #eth9_mac");
    }
}
