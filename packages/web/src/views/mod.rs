mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod recipes;
pub use recipes::Recipes;

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod add_recipe;
pub use add_recipe::AddRecipe;

mod edit_recipe;
pub use edit_recipe::EditRecipe;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod about;
pub use about::About;

mod not_found;
pub use not_found::NotFound;

use api::AuthQuery;
use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Send anonymous visitors to the login page, coming back to `path` after.
/// Waits for the stored session check before deciding.
pub(crate) fn use_require_login(path: String) {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading() && !state.is_logged_in() {
            tracing::debug!("Login required for {}", path);
            nav.replace(Route::login(AuthQuery::redirect_to(&path)));
        }
    });
}

/// Placeholder cards while a list loads.
#[component]
pub(crate) fn CardSkeletons(count: usize) -> Element {
    rsx! {
        div {
            class: "recipe-grid",
            for i in 0..count {
                div { key: "{i}", class: "skeleton" }
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub(crate) fn PasswordField(
    id: String,
    value: String,
    #[props(default)] invalid: bool,
    #[props(default = "current-password".to_string())] autocomplete: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let mut visible = use_signal(|| false);

    rsx! {
        div {
            class: "password-field",
            ui::components::Input {
                id: id,
                r#type: if visible() { "text" } else { "password" },
                placeholder: "••••••••",
                autocomplete: autocomplete,
                invalid: invalid,
                value: value,
                oninput: move |evt| oninput.call(evt),
            }
            button {
                r#type: "button",
                class: "password-toggle",
                title: if visible() { "Masquer le mot de passe" } else { "Afficher le mot de passe" },
                onclick: move |_| visible.toggle(),
                if visible() {
                    ui::Icon { icon: ui::icons::FaEyeSlash, width: 14, height: 14 }
                } else {
                    ui::Icon { icon: ui::icons::FaEye, width: 14, height: 14 }
                }
            }
        }
    }
}

/// Inline message under a form field.
#[component]
pub(crate) fn FieldMessage(errors: api::forms::FieldErrors, field: &'static str) -> Element {
    match errors.get(field) {
        Some(message) => rsx! { p { class: "field-error", "{message}" } },
        None => rsx! {},
    }
}
