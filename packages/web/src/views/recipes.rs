use api::fallback::filter_fallback;
use api::{RecipeQuery, PAGE_SIZE};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::icons::{FaMagnifyingGlass, FaXmark};
use ui::{use_client, Icon, PaginationBar, RecipeCard, RecipeFilters};

use super::CardSkeletons;
use crate::Route;

#[component]
#[allow(non_snake_case)]
pub fn Recipes(
    categorie: String,
    difficulte: String,
    regime: String,
    tempsMax: String,
    caloriesMax: String,
    ingredients: String,
    q: String,
    page: u32,
) -> Element {
    let query = RecipeQuery {
        page: page.max(1),
        q,
        category: categorie,
        difficulty: difficulte,
        diet: regime,
        max_minutes: tempsMax,
        max_calories: caloriesMax,
        ingredients,
    };
    let client = use_client();
    let nav = use_navigator();

    // Track the query in a signal so use_resource re-runs on navigation
    let mut query_signal = use_signal(|| query.clone());
    let mut search_text = use_signal(|| query.q.clone());
    if *query_signal.peek() != query {
        query_signal.set(query.clone());
        search_text.set(query.q.clone());
    }

    let results = use_resource(move || {
        let client = client.clone();
        let query = query_signal();
        async move {
            match client.search_recipes(&query).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Recipe search failed, showing built-in recipes: {}", e);
                    filter_fallback(&query)
                }
            }
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let next = query_signal.peek().with_search(&search_text.peek());
        nav.push(Route::recipes(next));
    };

    rsx! {
        h1 { "{query.title()}" }
        form {
            class: "search-bar",
            onsubmit: onsubmit,
            Input {
                placeholder: "Rechercher des recettes...",
                value: search_text(),
                oninput: move |evt: FormEvent| search_text.set(evt.value()),
            }
            if !search_text().is_empty() {
                Button {
                    r#type: "button",
                    variant: ButtonVariant::Ghost,
                    title: "Effacer",
                    onclick: move |_| search_text.set(String::new()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            Button { r#type: "submit",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
        }

        div {
            class: "recipes-layout",
            RecipeFilters {
                query: query.clone(),
                on_change: move |next: RecipeQuery| {
                    nav.push(Route::recipes(next));
                },
            }
            div {
                {match &*results.read() {
                    None => rsx! { CardSkeletons { count: 6 } },
                    Some(page) if page.items.is_empty() => rsx! {
                        div { class: "empty-state",
                            h3 { "Aucune recette trouvée" }
                            p { "Essayez de modifier vos critères de recherche ou de consulter toutes les recettes." }
                            Link { to: Route::recipes(RecipeQuery::default()), "Voir toutes les recettes" }
                        }
                    },
                    Some(page) => {
                        let plural = if page.total > 1 { "s" } else { "" };
                        rsx! {
                            p { class: "hint", "{page.total} recette{plural} trouvée{plural}" }
                            div { class: "recipe-grid",
                                for recipe in page.items.iter().cloned() {
                                    RecipeCard { key: "{recipe.id}", recipe }
                                }
                            }
                            PaginationBar { query: query.clone(), total_pages: page.total_pages(PAGE_SIZE) }
                        }
                    }
                }}
            }
        }
    }
}
