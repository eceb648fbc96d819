/// Process-wide mapping from an image locator to its previously fetched
/// inline payload. Entries live for the process lifetime; there is no
/// eviction because the catalog's image count stays small. Constructed
/// at startup and injected, never reached through a global.
pub trait ImageCache: Send + Sync {
    fn get(&self, locator: &str) -> Option<String>;
    fn put(&self, locator: &str, payload: String);
}
