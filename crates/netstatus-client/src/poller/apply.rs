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

//! Writing a status document into page elements.

use log::debug;

use crate::labels::LocalizedLabels;
use crate::page::{NetworkElements, Page, PageError};
use crate::protocol::StatusDocument;

/// Outcome of applying one document to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Entries processed.
    pub entries: usize,
    /// Element writes that landed.
    pub elements_updated: usize,
    /// Target ids the page did not contain, in write order.
    pub missing_elements: Vec<String>,
}

impl ApplyReport {
    /// Whether every target element was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_elements.is_empty()
    }
}

/// Overwrite each entry's mac, link, speed and order elements.
///
/// Entries are applied in document order. A missing element skips only that
/// write; the rest of the entry and the remaining entries still apply.
pub fn apply_document<P: Page + ?Sized>(
    page: &P,
    labels: &LocalizedLabels,
    document: &StatusDocument,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for entry in &document.networks {
        debug!(
            "entry: name={} mac={} link={} speed={} order={}",
            entry.name, entry.mac, entry.link, entry.speed, entry.order
        );

        let elements = NetworkElements::for_network(&entry.name);
        let writes = [
            (&elements.mac, entry.mac.clone()),
            (&elements.link, labels.link_label(entry.link).to_string()),
            (&elements.speed, labels.speed_text(&entry.speed)),
            (&elements.order, entry.order.to_string()),
        ];

        for (id, text) in writes {
            match page.set_text(id, &text) {
                Ok(()) => report.elements_updated += 1,
                Err(PageError::ElementNotFound(id)) => {
                    debug!("No element #{} for interface '{}'", id, entry.name);
                    report.missing_elements.push(id);
                }
            }
        }

        report.entries += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use crate::protocol::{NetworkEntry, Speed};

    fn entry(name: &str, mac: &str, link: i64, speed: Speed, order: i64) -> NetworkEntry {
        NetworkEntry {
            name: name.to_string(),
            mac: mac.to_string(),
            link,
            speed,
            order,
        }
    }

    fn page_with(names: &[&str]) -> MemoryPage {
        let mut builder = MemoryPage::builder();
        for name in names {
            for id in NetworkElements::for_network(name).ids() {
                builder = builder.text(id, "--");
            }
        }
        builder.build()
    }

    fn texts(page: &MemoryPage) -> Vec<(String, Option<String>)> {
        page.ids().into_iter().map(|id| {
            let text = page.text(&id);
            (id, text)
        }).collect()
    }

    #[test]
    fn test_apply_single_entry() {
        let page = page_with(&["eth0"]);
        let labels = LocalizedLabels::new("Up", "Down", "Mbps");
        let doc = StatusDocument {
            networks: vec![entry("eth0", "AA:BB:CC:DD:EE:FF", 1, Speed::Integer(1000), 1)],
        };

        let report = apply_document(&page, &labels, &doc);

        assert_eq!(page.text("eth0_mac").as_deref(), Some("AA:BB:CC:DD:EE:FF"));
        assert_eq!(page.text("eth0_link").as_deref(), Some("Up"));
        assert_eq!(page.text("eth0_speed").as_deref(), Some("1000 Mbps"));
        assert_eq!(page.text("eth0_order").as_deref(), Some("1"));
        assert_eq!(report.entries, 1);
        assert_eq!(report.elements_updated, 4);
        assert!(report.is_complete());
    }

    #[test]
    fn test_apply_link_down() {
        let page = page_with(&["eth1"]);
        let labels = LocalizedLabels::new("Up", "Down", "Mbps");
        let doc = StatusDocument {
            networks: vec![entry("eth1", "11:22:33:44:55:66", 0, Speed::Integer(0), 2)],
        };

        apply_document(&page, &labels, &doc);

        assert_eq!(page.text("eth1_link").as_deref(), Some("Down"));
        assert_eq!(page.text("eth1_speed").as_deref(), Some("0 Mbps"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let page = page_with(&["eth0", "eth1"]);
        let labels = LocalizedLabels::new("Up", "Down", "Mbps");
        let doc = StatusDocument {
            networks: vec![
                entry("eth0", "AA:BB:CC:DD:EE:FF", 1, Speed::Integer(1000), 1),
                entry("eth1", "11:22:33:44:55:66", 0, Speed::from("auto"), 2),
            ],
        };

        let first_report = apply_document(&page, &labels, &doc);
        let first = texts(&page);
        let second_report = apply_document(&page, &labels, &doc);
        let second = texts(&page);

        assert_eq!(first, second);
        assert_eq!(first_report, second_report);
    }

    #[test]
    fn test_apply_missing_elements_do_not_halt() {
        // ghost0 has no elements at all; eth0 lacks its order element
        let page = MemoryPage::builder()
            .element("eth0_mac")
            .element("eth0_link")
            .element("eth0_speed")
            .element("eth1_mac")
            .build();
        let labels = LocalizedLabels::new("Up", "Down", "Mbps");
        let doc = StatusDocument {
            networks: vec![
                entry("ghost0", "00:00:00:00:00:00", 1, Speed::Integer(10), 0),
                entry("eth0", "AA:BB:CC:DD:EE:FF", 1, Speed::Integer(1000), 1),
                entry("eth1", "11:22:33:44:55:66", 1, Speed::Integer(100), 2),
            ],
        };

        let report = apply_document(&page, &labels, &doc);

        assert_eq!(report.entries, 3);
        assert_eq!(report.elements_updated, 4);
        assert_eq!(
            report.missing_elements,
            vec![
                "ghost0_mac", "ghost0_link", "ghost0_speed", "ghost0_order",
                "eth0_order",
                "eth1_link", "eth1_speed", "eth1_order",
            ]
        );
        assert_eq!(page.text("eth0_speed").as_deref(), Some("1000 Mbps"));
        assert_eq!(page.text("eth1_mac").as_deref(), Some("11:22:33:44:55:66"));
        assert!(!page.contains("ghost0_mac"));
    }

    #[test]
    fn test_later_entry_with_same_name_wins() {
        let page = page_with(&["eth0"]);
        let labels = LocalizedLabels::default();
        let doc = StatusDocument {
            networks: vec![
                entry("eth0", "AA:AA:AA:AA:AA:AA", 1, Speed::Integer(100), 1),
                entry("eth0", "BB:BB:BB:BB:BB:BB", 0, Speed::Integer(10), 5),
            ],
        };

        apply_document(&page, &labels, &doc);

        assert_eq!(page.text("eth0_mac").as_deref(), Some("BB:BB:BB:BB:BB:BB"));
        assert_eq!(page.text("eth0_link").as_deref(), Some("Down"));
        assert_eq!(page.text("eth0_order").as_deref(), Some("5"));
    }

    #[test]
    fn test_apply_empty_document_leaves_page_untouched() {
        let page = page_with(&["eth0"]);
        let report = apply_document(&page, &LocalizedLabels::default(), &StatusDocument { networks: vec![] });

        assert_eq!(report, ApplyReport::default());
        assert_eq!(page.text("eth0_mac").as_deref(), Some("--"));
    }
}
