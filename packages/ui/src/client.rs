//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] over `reqwest` backed by the appropriate
//! [`store::KeyValueStore`] for the session:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native**: filesystem via [`store::FileStore`] under `<data_dir>/saveurs/`

use api::{ApiClient, ApiConfig, ReqwestTransport};
use dioxus::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

pub type Client = ApiClient<ReqwestTransport, PlatformStore>;

fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("saveurs");
        store::FileStore::new(base)
    }
}

/// Path of the login page the unauthorized hook sends the browser to.
pub const SESSION_EXPIRED_PATH: &str = "/connexion?session=expired";

/// Full-page redirect to the login view, unless it is already showing.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().ok().as_deref() == Some("/connexion") {
            return;
        }
        if let Err(e) = location.set_href(SESSION_EXPIRED_PATH) {
            tracing::error!("Failed to redirect to login: {:?}", e);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Session rejected by the server; sign in again at {}", SESSION_EXPIRED_PATH);
    }
}

/// Create the platform client with the unauthorized redirect installed.
pub fn make_client() -> Client {
    let config = ApiConfig::from_env();
    let transport = ReqwestTransport::new(config.api_url.clone());
    ApiClient::new(transport, platform_store(), config).with_unauthorized_hook(redirect_to_login)
}

/// The client provided by [`crate::AuthProvider`].
pub fn use_client() -> Client {
    use_context::<Client>()
}
