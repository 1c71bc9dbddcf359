//! Core types for the content cache.

use std::collections::BTreeMap;
use std::fmt;

use sidemenu_common::types::ContentId;

/// Lazily produces a content handle the first time its identifier is shown.
pub type ContentFactory = Box<dyn FnOnce() -> ContentId>;

/// One cache slot: either a materialized handle or a factory for one.
pub enum CacheEntry {
    Handle(ContentId),
    Factory(ContentFactory),
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEntry::Handle(id) => f.debug_tuple("Handle").field(id).finish(),
            CacheEntry::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Maps string identifiers to content handles or pending factories.
///
/// Resolving a factory consumes it and stores the produced handle under the
/// same identifier, so a factory runs at most once.
#[derive(Debug, Default)]
pub struct ContentCache {
    pub(super) entries: BTreeMap<String, CacheEntry>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&CacheEntry> {
        self.entries.get(identifier)
    }

    /// Identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
