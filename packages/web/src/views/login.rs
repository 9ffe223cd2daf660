//! Login page with email and password.

use api::forms::{FieldErrors, LoginForm};
use api::AuthQuery;
use dioxus::prelude::*;
use ui::components::{Button, Input, Label};
use ui::toast::{toast_error, toast_success, use_toasts};
use ui::{use_auth, use_client, AuthState};

use super::{FieldMessage, PasswordField};
use crate::Route;

/// Login page component.
#[component]
pub fn Login(redirect: String, session: String) -> Element {
    let query = AuthQuery::from_args(&redirect, &session);
    let client = use_client();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let target = query.target();

    // If already logged in, go where the visitor was headed
    use_effect({
        let target = target.clone();
        move || {
            if auth().is_logged_in() && !submitting() {
                nav.replace(target.clone());
            }
        }
    });

    let onsubmit = {
        let target = target.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let current = form.peek().clone();
            let found = current.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            let client = client.clone();
            let target = target.clone();
            submitting.set(true);
            spawn(async move {
                match client.sign_in(&current.credentials()).await {
                    Ok(user) => {
                        tracing::info!("Signed in as {}", user.id);
                        auth.set(AuthState::signed_in(user));
                        toast_success(&mut toasts, "Connexion réussie !");
                        nav.push(target);
                    }
                    Err(e) => {
                        tracing::warn!("Sign in failed: {}", e);
                        toast_error(&mut toasts, &e.user_message("Erreur lors de la connexion"));
                    }
                }
                submitting.set(false);
            });
        }
    };

    let values = form();
    let errs = errors();
    let expired = query.session_expired || auth().expired();
    let register_query = AuthQuery { redirect: query.redirect.clone(), session_expired: false };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Connexion" }
            p { class: "hint", style: "text-align: center;", "Bienvenue sur SaveursDuKmer !" }

            if expired {
                div { class: "banner warning", "Votre session a expiré. Veuillez vous reconnecter." }
            }

            form {
                novalidate: true,
                onsubmit: onsubmit,
                div { class: "field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "vous@exemple.com",
                        invalid: errs.get("email").is_some(),
                        value: values.email.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().email = evt.value();
                            errors.write().clear("email");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "email" }
                }
                div { class: "field",
                    Label { html_for: "password", "Mot de passe" }
                    PasswordField {
                        id: "password",
                        invalid: errs.get("password").is_some(),
                        value: values.password.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().password = evt.value();
                            errors.write().clear("password");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "password" }
                }
                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Connexion..." } else { "Se connecter" }
                }
            }

            p { class: "auth-switch",
                "Pas encore de compte ? "
                Link { to: Route::register(register_query), "Créer un compte" }
            }
        }
    }
}
