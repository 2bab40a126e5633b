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

//! Text rendering of the status page.

use chrono::{DateTime, Local, Utc};
use netstatus_client::{MemoryPage, NetworkElements, PollerStats};

use crate::page_template::PLACEHOLDER;

const HEADERS: [&str; 5] = ["Interface", "MAC", "Link", "Speed", "Order"];

#[derive(Debug)]
pub struct StatusView {
    interfaces: Vec<String>,
}

impl StatusView {
    pub fn new(interfaces: Vec<String>) -> Self {
        Self { interfaces }
    }

    /// Render one row per interface from the page's current element text
    pub fn render_table(&self, page: &MemoryPage) -> String {
        let rows: Vec<[String; 5]> = self
            .interfaces
            .iter()
            .map(|name| {
                let elements = NetworkElements::for_network(name);
                let cell = |id: &str| page.text(id).unwrap_or_else(|| PLACEHOLDER.to_string());
                [
                    name.clone(),
                    cell(&elements.mac),
                    cell(&elements.link),
                    cell(&elements.speed),
                    cell(&elements.order),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_row(&mut out, &HEADERS.map(str::to_string), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(rule.join("  ").trim_end());
        out.push('\n');
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        out
    }

    /// One-line summary of poll activity
    pub fn render_footer(stats: &PollerStats) -> String {
        format!(
            "polls: {}  failed: {}  last update: {}",
            stats.cycles_started,
            stats.cycles_failed,
            format_last_update(stats.last_applied_at)
        )
    }
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn format_last_update(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(
        || "never".to_string(),
        |t| t.with_timezone(&Local).format("%H:%M:%S").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use netstatus_client::Page;

    #[test]
    fn test_render_table() {
        let page = MemoryPage::builder()
            .text("eth0_mac", "AA:BB:CC:DD:EE:FF")
            .text("eth0_link", "Up")
            .text("eth0_speed", "1000 Mbps")
            .text("eth0_order", "1")
            .build();
        let view = StatusView::new(vec!["eth0".to_string(), "wlan0".to_string()]);

        let table = view.render_table(&page);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Interface  MAC                Link  Speed      Order");
        assert_eq!(lines[2], "eth0       AA:BB:CC:DD:EE:FF  Up    1000 Mbps  1");
        assert_eq!(lines[3], "wlan0      -                  -     -          -");
    }

    #[test]
    fn test_render_reflects_page_updates() {
        let page = MemoryPage::builder().text("eth0_link", "Up").build();
        let view = StatusView::new(vec!["eth0".to_string()]);

        assert!(view.render_table(&page).contains("Up"));
        page.set_text("eth0_link", "Down").unwrap();
        assert!(view.render_table(&page).contains("Down"));
    }

    #[test]
    fn test_footer_never_updated() {
        let footer = StatusView::render_footer(&PollerStats::default());
        assert_eq!(footer, "polls: 0  failed: 0  last update: never");
    }

    #[test]
    fn test_footer_counts() {
        let stats = PollerStats {
            cycles_started: 12,
            cycles_failed: 2,
            documents_applied: 10,
            last_applied_at: Some(Utc::now()),
        };
        let footer = StatusView::render_footer(&stats);
        assert!(footer.starts_with("polls: 12  failed: 2  last update: "));
        assert!(!footer.ends_with("never"));
    }
}
