//! # Session lifecycle
//!
//! ```text
//!             restore: no token / bad token / profile fails
//!   ┌──────────────────────────────────────────────┐
//!   ▼                                              │
//! Anonymous ──restore: live token──▶ Pending ──────┤
//!   ▲   │                              │ profile ok
//!   │   └──sign_in / sign_up──┐        ▼
//!   │                         └──▶ Authenticated(User)
//!   │ sign_out / 401                   │
//!   └──────────────────────────────────┘
//!
//! restore: token with exp <= now ──▶ Expired  (storage cleared, no request)
//! ```
//!
//! The token is read from and written to the client's [`SessionStore`]; the
//! phase itself is held by the UI.

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthSession, Credentials, PasswordChange, ProfileUpdate, Registration, User};
use crate::token::decode_claims;
use crate::transport::{FileUpload, Transport};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    /// A stored token is being checked against the profile endpoint.
    Pending,
    Authenticated(User),
    /// Anonymous because the stored token had expired.
    Expired,
}

impl SessionPhase {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionPhase::Authenticated(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionPhase::Pending)
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// Resolve the stored session on startup. `now_secs` is the current Unix
    /// time; an expired token is dropped without contacting the backend.
    pub async fn restore_session(&self, now_secs: i64) -> SessionPhase {
        let Some(token) = self.session().token() else {
            return SessionPhase::Anonymous;
        };
        let claims = match decode_claims(&token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!("Discarding unreadable stored token: {}", e);
                self.session().clear();
                return SessionPhase::Anonymous;
            }
        };
        if claims.is_expired(now_secs) {
            tracing::info!("Stored token expired, signing out");
            self.session().clear();
            return SessionPhase::Expired;
        }

        match self.profile().await {
            Ok(user) => {
                tracing::info!("Session restored for {}", user.email);
                self.session().set_user(&user);
                SessionPhase::Authenticated(user)
            }
            Err(e) => {
                tracing::warn!("Profile fetch failed during restore: {}", e);
                self.session().clear();
                SessionPhase::Anonymous
            }
        }
    }

    fn store_session(&self, session: AuthSession) -> User {
        self.session().save(&session.token, &session.user);
        session.user
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let session = self.login(credentials).await?;
        tracing::info!("Signed in as {}", session.user.email);
        Ok(self.store_session(session))
    }

    pub async fn sign_up(&self, registration: &Registration) -> Result<User, ApiError> {
        let session = self.register(registration).await?;
        tracing::info!("Registered {}", session.user.email);
        Ok(self.store_session(session))
    }

    /// Local sign-out: forget the token and cached user.
    pub fn sign_out(&self) {
        tracing::info!("Signing out");
        self.session().clear();
    }

    pub async fn save_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let user = self.update_profile(update).await?;
        self.session().set_user(&user);
        Ok(user)
    }

    /// Upload a new profile photo and return the refreshed profile.
    pub async fn change_profile_photo(&self, photo: FileUpload) -> Result<User, ApiError> {
        self.update_profile_photo(photo).await?;
        let user = self.profile().await?;
        self.session().set_user(&user);
        Ok(user)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.update_password(change).await
    }
}

#[cfg(test)]
mod tests {
    use store::{KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};

    use super::*;
    use crate::testing::{client_with, RecordingTransport};
    use crate::token::make_token;
    use crate::transport::ApiResponse;

    const NOW: i64 = 1_760_000_000;
    const PROFILE: &str = r#"{"success":true,"data":{"_id":"u1","prenom":"Awa","nom":"Mbarga","email":"awa@example.cm","role":"user"}}"#;

    fn profile_server() -> RecordingTransport {
        RecordingTransport::new(|_| ApiResponse::new(200, PROFILE))
    }

    #[tokio::test]
    async fn test_no_token_is_anonymous() {
        let transport = profile_server();
        let client = client_with(transport.clone(), MemoryStore::new());
        assert_eq!(client.restore_session(NOW).await, SessionPhase::Anonymous);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_expired_token_never_fetches_profile() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, &make_token(NOW - 60));
        store.set(USER_KEY, r#"{"id":"u1"}"#);
        let transport = profile_server();
        let client = client_with(transport.clone(), store.clone());

        assert_eq!(client.restore_session(NOW).await, SessionPhase::Expired);
        assert!(transport.requests().is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_live_token_restores_user() {
        let store = MemoryStore::new();
        let token = make_token(NOW + 3600);
        store.set(TOKEN_KEY, &token);
        let transport = profile_server();
        let client = client_with(transport.clone(), store.clone());

        let phase = client.restore_session(NOW).await;
        assert_eq!(phase.user().map(|u| u.first_name.as_str()), Some("Awa"));
        assert_eq!(transport.paths(), vec!["/auth/profil".to_string()]);
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some(token.as_str()));
        assert_eq!(client.session().user::<User>().map(|u| u.id), Some("u1".to_string()));
    }

    #[tokio::test]
    async fn test_profile_with_virtual_id_keeps_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, &make_token(NOW + 3600));
        let transport = RecordingTransport::new(|_| {
            ApiResponse::new(
                200,
                r#"{"success":true,"data":{"_id":"u1","id":"u1","prenom":"Awa","nom":"Mbarga","email":"awa@example.cm"}}"#,
            )
        });
        let client = client_with(transport, store.clone());

        let phase = client.restore_session(NOW).await;
        assert_eq!(phase.user().map(|u| u.id.as_str()), Some("u1"));
        assert!(store.get(TOKEN_KEY).is_some());
    }

    #[tokio::test]
    async fn test_malformed_token_clears_storage() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "not-a-jwt");
        let transport = profile_server();
        let client = client_with(transport.clone(), store.clone());

        assert_eq!(client.restore_session(NOW).await, SessionPhase::Anonymous);
        assert!(store.is_empty());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_profile_failure_clears_storage() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, &make_token(NOW + 3600));
        let client = client_with(RecordingTransport::new(|_| ApiResponse::new(500, "")), store.clone());

        assert_eq!(client.restore_session(NOW).await, SessionPhase::Anonymous);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_stores_session_and_sign_out_clears_it() {
        let store = MemoryStore::new();
        let transport = RecordingTransport::new(|_| {
            ApiResponse::new(
                200,
                r#"{"success":true,"token":"tok","data":{"_id":"u1","prenom":"Awa","nom":"Mbarga","email":"awa@example.cm"}}"#,
            )
        });
        let client = client_with(transport, store.clone());

        let user = client
            .sign_in(&Credentials { email: "awa@example.cm".into(), password: "secret1".into() })
            .await
            .unwrap();
        assert_eq!(user.display_name(), "Awa Mbarga");
        assert_eq!(client.session().token().as_deref(), Some("tok"));
        assert_eq!(client.session().user::<User>(), Some(user));

        client.sign_out();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_failed_sign_up_stores_nothing() {
        let store = MemoryStore::new();
        let client = client_with(
            RecordingTransport::new(|_| ApiResponse::new(400, r#"{"success":false,"message":"Cet email est déjà utilisé"}"#)),
            store.clone(),
        );
        let err = client
            .sign_up(&Registration {
                first_name: "Awa".into(),
                last_name: "Mbarga".into(),
                email: "awa@example.cm".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Erreur lors de l'inscription"), "Cet email est déjà utilisé");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_change_profile_photo_refetches_profile() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        let transport = profile_server();
        let client = client_with(transport.clone(), store);

        let photo = FileUpload { file_name: "me.png".into(), mime: "image/png".into(), bytes: vec![1] };
        client.change_profile_photo(photo).await.unwrap();
        assert_eq!(transport.paths(), vec!["/auth/profil/photo".to_string(), "/auth/profil".to_string()]);
    }
}
