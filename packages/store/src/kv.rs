//! # Key/value storage seam
//!
//! [`KeyValueStore`] is the small synchronous interface the session layer
//! persists through. Implementations live in sibling modules:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::MemoryStore`] | any | `HashMap` behind `Arc<Mutex<_>>` |
//! | [`crate::FileStore`] | native | one file per key under a base directory |
//! | `LocalStorageStore` | wasm32 + `web` | the browser's `window.localStorage` |
//!
//! Every method is infallible from the caller's point of view. A store that
//! cannot be read behaves as empty and a failed write is logged and dropped,
//! so an unavailable storage backend degrades to "not logged in" instead of
//! breaking the UI.

/// String-keyed, string-valued storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
