use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use super::RenderedStyle;

/// Cache key: exact image source plus requested avatar radius in pixels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub source: String,
    pub size: u32,
}

impl StyleKey {
    pub fn new(source: &str, size: u32) -> Self {
        Self {
            source: source.to_string(),
            size,
        }
    }
}

/// Append-only memo of rendered marker styles.
///
/// The handle is cheap to clone and every clone sees the same entries, so one cache can
/// be shared by the compositor jobs and the controller. Entries are never evicted. Two
/// renders of the same key racing each other are fine: the last `put` wins.
#[derive(Clone, Debug, Default)]
pub struct StyleCache {
    entries: Arc<RwLock<HashMap<StyleKey, RenderedStyle>>>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: &str, size: u32) -> Option<RenderedStyle> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&StyleKey::new(source, size)).cloned()
    }

    pub fn put(&self, source: &str, size: u32, style: RenderedStyle) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(StyleKey::new(source, size), style);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
