use api::forms::{CUISINES, DIETS};
use api::{Difficulty, RecipeQuery};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::FaFilter;
use crate::Icon;

/// Side panel editing the list filters.
///
/// Edits stay local until "Appliquer"; `on_change` then receives the query to
/// navigate to.
#[component]
pub fn RecipeFilters(query: RecipeQuery, on_change: EventHandler<RecipeQuery>) -> Element {
    let mut draft = use_signal(|| query.clone());
    let mut source = use_signal(|| query.clone());

    // Follow navigation (back button, category links).
    if *source.peek() != query {
        source.set(query.clone());
        draft.set(query.clone());
    }

    let current = draft();

    rsx! {
        aside {
            class: "recipe-filters",
            h2 {
                Icon { icon: FaFilter, width: 14, height: 14 }
                " Filtres"
            }

            div { class: "field",
                Label { html_for: "filter-category", "Type de cuisine" }
                select {
                    id: "filter-category",
                    value: "{current.category}",
                    onchange: move |evt| draft.write().category = evt.value(),
                    option { value: "", "Toutes" }
                    for cuisine in CUISINES {
                        option { key: "{cuisine}", value: cuisine, selected: current.category == cuisine, "{cuisine}" }
                    }
                }
            }

            div { class: "field",
                Label { html_for: "filter-difficulty", "Difficulté" }
                select {
                    id: "filter-difficulty",
                    value: "{current.difficulty}",
                    onchange: move |evt| draft.write().difficulty = evt.value(),
                    option { value: "", "Toutes" }
                    for level in Difficulty::ALL {
                        option {
                            key: "{level}",
                            value: level.label().to_string(),
                            selected: current.difficulty == level.label(),
                            "{level}"
                        }
                    }
                }
            }

            div { class: "field",
                Label { html_for: "filter-diet", "Régime alimentaire" }
                select {
                    id: "filter-diet",
                    value: "{current.diet}",
                    onchange: move |evt| draft.write().diet = evt.value(),
                    option { value: "", "Tous" }
                    for diet in DIETS {
                        option { key: "{diet}", value: diet, selected: current.diet == diet, "{diet}" }
                    }
                }
            }

            div { class: "field",
                Label { html_for: "filter-minutes", "Temps maximum (min)" }
                Input {
                    id: "filter-minutes",
                    r#type: "number",
                    min: "0",
                    value: current.max_minutes.clone(),
                    oninput: move |evt: FormEvent| draft.write().max_minutes = evt.value(),
                }
            }

            div { class: "field",
                Label { html_for: "filter-calories", "Calories maximum" }
                Input {
                    id: "filter-calories",
                    r#type: "number",
                    min: "0",
                    value: current.max_calories.clone(),
                    oninput: move |evt: FormEvent| draft.write().max_calories = evt.value(),
                }
            }

            div { class: "field",
                Label { html_for: "filter-ingredients", "Ingrédients" }
                Input {
                    id: "filter-ingredients",
                    placeholder: "ex: poulet, tomate",
                    value: current.ingredients.clone(),
                    oninput: move |evt: FormEvent| draft.write().ingredients = evt.value(),
                }
            }

            div { class: "filter-actions",
                Button {
                    onclick: move |_| on_change.call(draft.peek().applied()),
                    "Appliquer"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let cleared = draft.peek().reset();
                        draft.set(cleared.clone());
                        on_change.call(cleared);
                    },
                    "Réinitialiser"
                }
            }
        }
    }
}
