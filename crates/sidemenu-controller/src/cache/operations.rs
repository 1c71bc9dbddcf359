//! Mutating operations on ContentCache: insert, remove, resolve.

use sidemenu_common::types::ContentId;
use sidemenu_common::CacheError;
use tracing::debug;

use super::{CacheEntry, ContentCache, ContentFactory};

impl ContentCache {
    /// Cache a materialized handle, replacing any entry for `identifier`.
    pub fn insert_handle(&mut self, identifier: impl Into<String>, content: ContentId) {
        self.entries
            .insert(identifier.into(), CacheEntry::Handle(content));
    }

    /// Cache a factory, replacing any entry for `identifier`.
    pub fn insert_factory(&mut self, identifier: impl Into<String>, factory: ContentFactory) {
        self.entries
            .insert(identifier.into(), CacheEntry::Factory(factory));
    }

    /// Remove whatever is cached for `identifier`. Returns `true` if found.
    pub fn remove(&mut self, identifier: &str) -> bool {
        self.entries.remove(identifier).is_some()
    }

    /// Resolve `identifier` to a handle, running its factory if needed.
    pub fn resolve(&mut self, identifier: &str) -> Result<ContentId, CacheError> {
        let content = match self.entries.remove(identifier) {
            Some(CacheEntry::Handle(content)) => content,
            Some(CacheEntry::Factory(factory)) => {
                let content = factory();
                debug!(identifier, %content, "materialized cached content");
                content
            }
            None => return Err(CacheError::UnknownIdentifier(identifier.to_string())),
        };
        self.entries
            .insert(identifier.to_string(), CacheEntry::Handle(content));
        Ok(content)
    }

    /// First identifier (in sorted order) whose materialized handle is `content`.
    pub fn identifier_of(&self, content: ContentId) -> Option<&str> {
        self.entries.iter().find_map(|(identifier, entry)| match entry {
            CacheEntry::Handle(id) if *id == content => Some(identifier.as_str()),
            _ => None,
        })
    }
}
