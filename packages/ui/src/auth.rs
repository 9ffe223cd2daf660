//! Authentication context and hooks for the UI.

use api::{SessionPhase, User};
use dioxus::prelude::*;

use crate::client::{make_client, Client};
use crate::toast::{toast_success, use_toasts};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub phase: SessionPhase,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { phase: SessionPhase::Pending }
    }
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self { phase: SessionPhase::Authenticated(user) }
    }

    pub fn anonymous() -> Self {
        Self { phase: SessionPhase::Anonymous }
    }

    pub fn user(&self) -> Option<&User> {
        self.phase.user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.phase.is_authenticated()
    }

    /// The stored session is still being checked.
    pub fn loading(&self) -> bool {
        self.phase.is_pending()
    }

    /// The last stored session had expired when the app loaded.
    pub fn expired(&self) -> bool {
        self.phase == SessionPhase::Expired
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the API client and the authentication state.
///
/// On mount the stored token is checked: an expired token is dropped without a
/// request, a live one is confirmed against the profile endpoint.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(make_client);
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let phase = client.restore_session(api::token::now_secs()).await;
            tracing::debug!("Session restored: {:?}", phase);
            auth_state.set(AuthState { phase });
        }
    });

    rsx! {
        {children}
    }
}

/// Forget the session locally and mark the state anonymous.
pub fn sign_out(client: &Client, auth: &mut Signal<AuthState>) {
    client.sign_out();
    auth.set(AuthState::anonymous());
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Déconnexion".to_string())] label: String,
    #[props(default)] class: String,
) -> Element {
    let client = crate::client::use_client();
    let mut auth_state = use_auth();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let onclick = move |_| {
        sign_out(&client, &mut auth_state);
        toast_success(&mut toasts, "Déconnexion réussie");
        nav.push("/");
    };

    rsx! {
        button {
            class: "logout-button {class}",
            onclick: onclick,
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    #[test]
    fn test_auth_state_phases() {
        let state = AuthState::default();
        assert!(state.loading());
        assert!(!state.is_logged_in());

        let user = User {
            id: "u1".into(),
            first_name: "Awa".into(),
            last_name: "Ngo".into(),
            email: "awa@example.cm".into(),
            photo: None,
            role: Role::User,
        };
        let state = AuthState::signed_in(user);
        assert!(state.is_logged_in());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));

        let state = AuthState { phase: SessionPhase::Expired };
        assert!(state.expired());
        assert!(!state.loading());
        assert!(state.user().is_none());
    }
}
