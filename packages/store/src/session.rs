//! # Persisted session: token and cached user record
//!
//! [`SessionStore`] wraps any [`KeyValueStore`] and owns the two keys the
//! client persists between page loads:
//!
//! | Key | Content |
//! |-----|---------|
//! | [`TOKEN_KEY`] (`"token"`) | the raw bearer token issued by the backend |
//! | [`USER_KEY`] (`"user"`) | the last known user record, serialised as JSON |
//!
//! The user record type is generic so this crate stays independent of the API
//! models. A cached record that no longer deserialises is treated as absent.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the cached user record.
pub const USER_KEY: &str = "user";

/// Typed access to the persisted session.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn user<U: DeserializeOwned>(&self) -> Option<U> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    pub fn set_user<U: Serialize>(&self, user: &U) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => tracing::error!("Failed to serialise user for storage: {}", e),
        }
    }

    /// Store a freshly issued token together with its user.
    pub fn save<U: Serialize>(&self, token: &str, user: &U) {
        self.set_token(token);
        self.set_user(user);
    }

    /// Remove both the token and the cached user.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        email: String,
    }

    #[test]
    fn test_save_and_clear() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.token().is_none());
        assert!(session.user::<Profile>().is_none());

        let profile = Profile { email: "awa@example.cm".to_string() };
        session.save("tok", &profile);

        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.user::<Profile>(), Some(profile));

        session.clear();
        assert!(session.token().is_none());
        assert!(session.inner().is_empty());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_token("");
        assert!(session.token().is_none());
    }

    #[test]
    fn test_corrupt_user_is_absent() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "{not json");
        let session = SessionStore::new(store);
        assert!(session.user::<Profile>().is_none());
    }
}
