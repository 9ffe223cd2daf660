use api::forms::{password_strength, strength_label, FieldErrors, RegisterForm};
use api::AuthQuery;
use dioxus::prelude::*;
use ui::components::{Button, Input, Label};
use ui::toast::{toast_error, toast_success, use_toasts};
use ui::{use_auth, use_client, AuthState};

use super::{FieldMessage, PasswordField};
use crate::Route;

const CRITERIA: [&str; 4] = [
    "Au moins 8 caractères",
    "Majuscules et minuscules",
    "Au moins un chiffre",
    "Au moins un caractère spécial",
];

#[component]
pub fn Register(redirect: String, session: String) -> Element {
    let query = AuthQuery::from_args(&redirect, &session);
    let client = use_client();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut form = use_signal(RegisterForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let target = query.target();

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
                match client.sign_up(&current.registration()).await {
                    Ok(user) => {
                        tracing::info!("Registered {}", user.id);
                        auth.set(AuthState::signed_in(user));
                        toast_success(&mut toasts, "Inscription réussie !");
                        nav.push(target);
                    }
                    Err(e) => {
                        tracing::warn!("Registration failed: {}", e);
                        toast_error(&mut toasts, &e.user_message("Erreur lors de l'inscription"));
                    }
                }
                submitting.set(false);
            });
        }
    };

    let values = form();
    let errs = errors();
    let strength = password_strength(&values.password);
    let login_query = AuthQuery { redirect: query.redirect.clone(), session_expired: false };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Créer un compte" }
            p { class: "hint", style: "text-align: center;", "Rejoignez la communauté SaveursDuKmer" }

            form {
                novalidate: true,
                onsubmit: onsubmit,
                div { class: "field-row",
                    div { class: "field",
                        Label { html_for: "first_name", "Prénom" }
                        Input {
                            id: "first_name",
                            autocomplete: "given-name",
                            invalid: errs.get("first_name").is_some(),
                            value: values.first_name.clone(),
                            oninput: move |evt: FormEvent| {
                                form.write().first_name = evt.value();
                                errors.write().clear("first_name");
                            },
                        }
                        FieldMessage { errors: errs.clone(), field: "first_name" }
                    }
                    div { class: "field",
                        Label { html_for: "last_name", "Nom" }
                        Input {
                            id: "last_name",
                            autocomplete: "family-name",
                            invalid: errs.get("last_name").is_some(),
                            value: values.last_name.clone(),
                            oninput: move |evt: FormEvent| {
                                form.write().last_name = evt.value();
                                errors.write().clear("last_name");
                            },
                        }
                        FieldMessage { errors: errs.clone(), field: "last_name" }
                    }
                }
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
                        autocomplete: "new-password",
                        invalid: errs.get("password").is_some(),
                        value: values.password.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().password = evt.value();
                            errors.write().clear("password");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "password" }
                    if !values.password.is_empty() {
                        div {
                            class: "hint",
                            "Force du mot de passe : {strength_label(strength)}"
                        }
                        div { class: "strength-meter",
                            for level in 1..=4u8 {
                                span { key: "{level}", class: if level <= strength { "on" } else { "" } }
                            }
                        }
                        ul { class: "hint",
                            for criterion in CRITERIA {
                                li { key: "{criterion}", "{criterion}" }
                            }
                        }
                    }
                }
                div { class: "field",
                    Label { html_for: "confirm_password", "Confirmer le mot de passe" }
                    PasswordField {
                        id: "confirm_password",
                        autocomplete: "new-password",
                        invalid: errs.get("confirm_password").is_some(),
                        value: values.confirm_password.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().confirm_password = evt.value();
                            errors.write().clear("confirm_password");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "confirm_password" }
                }
                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Inscription..." } else { "S'inscrire" }
                }
            }

            p { class: "auth-switch",
                "Déjà un compte ? "
                Link { to: Route::login(login_query), "Se connecter" }
            }
        }
    }
}
