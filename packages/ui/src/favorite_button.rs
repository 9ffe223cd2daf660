use api::FavoriteToggle;
use dioxus::prelude::*;

use crate::client::use_client;
use crate::icons::FaHeart;
use crate::toast::{toast, toast_error, toast_success, use_toasts, LogLevel};
use crate::{use_auth, Icon};

/// Heart button toggling a recipe in the viewer's favorites.
///
/// The heart flips on click; see [`FavoriteToggle`] for how late answers are
/// reconciled. `on_change` fires with the new state once the server agreed.
#[component]
pub fn FavoriteButton(
    recipe_id: String,
    is_favorite: bool,
    #[props(default)] with_label: bool,
    on_change: Option<EventHandler<bool>>,
) -> Element {
    let client = use_client();
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut state = use_signal(|| FavoriteToggle::new(is_favorite));

    let onclick = move |evt: MouseEvent| {
        // The button sits inside the card link.
        evt.prevent_default();
        evt.stop_propagation();

        if !auth().is_logged_in() {
            toast(
                &mut toasts,
                LogLevel::Warning,
                "Veuillez vous connecter pour ajouter des recettes à vos favoris",
            );
            return;
        }

        let ticket = state.write().flip();
        let now_favorite = state.peek().is_favorite();
        let client = client.clone();
        let id = recipe_id.clone();
        spawn(async move {
            let result = client.toggle_favorite(&id).await;
            if state.write().settle(ticket, result.is_ok()) {
                tracing::debug!("Favorite toggle for {} reverted", id);
            }
            match result {
                Ok(()) => {
                    let message = if now_favorite { "Ajouté aux favoris" } else { "Retiré des favoris" };
                    toast_success(&mut toasts, message);
                    if let Some(handler) = &on_change {
                        handler.call(now_favorite);
                    }
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    tracing::error!("Favorite toggle failed for {}: {}", id, e);
                    toast_error(&mut toasts, &e.user_message("Une erreur est survenue"));
                }
            }
        });
    };

    let active = state().is_favorite();
    let title = if active { "Retirer des favoris" } else { "Ajouter aux favoris" };

    rsx! {
        button {
            r#type: "button",
            class: if active { "favorite-button active" } else { "favorite-button" },
            title: title,
            onclick: onclick,
            Icon { icon: FaHeart, width: 16, height: 16 }
            if with_label {
                span { if active { "Dans vos favoris" } else { "Ajouter aux favoris" } }
            }
        }
    }
}
