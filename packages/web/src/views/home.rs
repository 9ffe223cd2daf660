use api::{ListParams, RecipeQuery};
use dioxus::prelude::*;
use ui::components::{Button, Input};
use ui::icons::FaMagnifyingGlass;
use ui::{use_client, Icon, RecipeCard};

use super::CardSkeletons;
use crate::Route;

fn shortcut(label: &'static str, query: RecipeQuery) -> (&'static str, Route) {
    (label, Route::recipes(query))
}

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut search = use_signal(String::new);

    let popular = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_recipes(&ListParams::sorted("-noteMoyenne", 3)).await }
        }
    });
    let latest = use_resource(move || {
        let client = client.clone();
        async move { client.list_recipes(&ListParams::sorted("-dateCreation", 1)).await }
    });

    let shortcuts = [
        shortcut("Camerounaise", RecipeQuery { category: "Camerounaise".into(), ..Default::default() }),
        shortcut("Végétarien", RecipeQuery { diet: "Végétarien".into(), ..Default::default() }),
        shortcut("Facile", RecipeQuery { difficulty: "Facile".into(), ..Default::default() }),
        shortcut("Rapide (< 30 min)", RecipeQuery { max_minutes: "30".into(), ..Default::default() }),
    ];

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let query = RecipeQuery::default().with_search(&search.peek());
        nav.push(Route::recipes(query));
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Les saveurs du Cameroun, à portée de main" }
            p { "Découvrez et partagez les meilleures recettes de cuisine camerounaise et africaine." }
            form {
                class: "search-bar",
                onsubmit: onsubmit,
                Input {
                    placeholder: "Rechercher des recettes...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                Button { r#type: "submit",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                }
            }
        }

        section {
            h2 { "Catégories" }
            div {
                class: "category-shortcuts",
                for (label, route) in shortcuts {
                    Link { key: "{label}", to: route, class: "category-shortcut", "{label}" }
                }
            }
        }

        section {
            div { class: "section-header",
                h2 { "Top recettes" }
                Link { to: Route::recipes(RecipeQuery::default()), "Voir toutes les recettes" }
            }
            p { class: "hint", "Nos recettes les plus appréciées" }
            {match &*popular.read() {
                Some(Ok(page)) if !page.items.is_empty() => rsx! {
                    div { class: "recipe-grid",
                        for recipe in page.items.iter().cloned() {
                            RecipeCard { key: "{recipe.id}", recipe }
                        }
                    }
                },
                Some(Ok(_)) => rsx! { p { class: "empty-state", "Aucune recette pour le moment." } },
                Some(Err(e)) => {
                    tracing::error!("Popular recipes failed: {}", e);
                    rsx! { p { class: "error-state", "Impossible de charger les recettes populaires." } }
                }
                None => rsx! { CardSkeletons { count: 3 } },
            }}
        }

        section {
            h2 { "Dernière recette" }
            {match &*latest.read() {
                Some(Ok(page)) => match page.items.first().cloned() {
                    Some(recipe) => rsx! {
                        div { class: "recipe-grid", RecipeCard { recipe } }
                    },
                    None => rsx! {},
                },
                Some(Err(e)) => {
                    tracing::warn!("Latest recipe failed: {}", e);
                    rsx! {}
                }
                None => rsx! { CardSkeletons { count: 1 } },
            }}
        }
    }
}
