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

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use super::{Page, PageError};

#[derive(Debug, Clone, Default)]
struct Element {
    text: String,
    data: HashMap<String, String>,
}

/// In-memory page: a flat map from element id to text and data attributes.
///
/// The element set is fixed when the page is built; only text changes
/// afterwards, mirroring a rendered template whose nodes are updated in place.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: RwLock<BTreeMap<String, Element>>,
}

impl MemoryPage {
    #[must_use]
    pub fn builder() -> MemoryPageBuilder {
        MemoryPageBuilder::default()
    }

    /// Current text of an element.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .map(|e| e.text.clone())
    }

    /// All element ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Page for MemoryPage {
    fn contains(&self, id: &str) -> bool {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    fn data_attribute(&self, id: &str, key: &str) -> Option<String> {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .and_then(|e| e.data.get(key).cloned())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        let element = elements
            .get_mut(id)
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))?;
        text.clone_into(&mut element.text);
        Ok(())
    }
}

/// Builder for [`MemoryPage`].
#[derive(Debug, Default)]
pub struct MemoryPageBuilder {
    elements: BTreeMap<String, Element>,
}

impl MemoryPageBuilder {
    /// Add an empty element (no-op if it already exists).
    #[must_use]
    pub fn element(mut self, id: impl Into<String>) -> Self {
        self.elements.entry(id.into()).or_default();
        self
    }

    /// Add an element with initial text.
    #[must_use]
    pub fn text(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.elements.entry(id.into()).or_default().text = text.into();
        self
    }

    /// Set a `data-*` attribute, creating the element if needed.
    #[must_use]
    pub fn data(mut self, id: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements
            .entry(id.into())
            .or_default()
            .data
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn build(self) -> MemoryPage {
        MemoryPage {
            elements: RwLock::new(self.elements),
        }
    }
}
