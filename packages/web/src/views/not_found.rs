use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        div {
            class: "empty-state",
            h1 { "Page introuvable" }
            p { "La page /{path} n'existe pas." }
            Link { to: Route::Home {}, "Retour à l'accueil" }
        }
    }
}
