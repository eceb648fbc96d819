use std::collections::HashMap;
use std::sync::Mutex;

use business::domain::image::cache::ImageCache;

/// Mutex-guarded map from locator to inline payload. Entries are never
/// evicted; the catalog's image set is small and payloads are only a few
/// hundred kilobytes each.
#[derive(Default)]
pub struct InMemoryImageCache {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryImageCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageCache for InMemoryImageCache {
    fn get(&self, locator: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(locator)
            .cloned()
    }

    fn put(&self, locator: &str, payload: String) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(locator.to_string(), payload);
    }
}
