use api::RecipeQuery;
use dioxus::prelude::*;

use crate::Route;

const VALUES: [(&str, &str); 3] = [
    (
        "Transmettre",
        "Chaque recette publiée garde vivante une façon de cuisiner apprise en famille.",
    ),
    (
        "Partager",
        "Commentez, notez et enregistrez les plats qui vous inspirent.",
    ),
    (
        "Découvrir",
        "Du ndolé au poulet DG, explorez la diversité des cuisines camerounaises et africaines.",
    ),
];

/// Static presentation page.
#[component]
pub fn About() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "À propos de SaveursDuKmer" }
            p {
                "SaveursDuKmer rassemble les passionnés de cuisine camerounaise et africaine "
                "autour d'un carnet de recettes ouvert à tous."
            }
        }
        section {
            class: "category-shortcuts",
            for (title, text) in VALUES {
                div { key: "{title}", class: "category-shortcut",
                    h3 { "{title}" }
                    p { class: "hint", "{text}" }
                }
            }
        }
        p { style: "text-align: center;",
            Link { to: Route::recipes(RecipeQuery::default()), class: "button outline-link", "Parcourir les recettes" }
        }
    }
}
