use api::Recipe;
use dioxus::prelude::*;

use crate::client::use_client;
use crate::icons::{FaClock, FaUser};
use crate::{FavoriteButton, Icon, SafeImage, StarRating};

/// Summary tile linking to a recipe's page.
#[component]
pub fn RecipeCard(recipe: Recipe, on_favorite_change: Option<EventHandler<bool>>) -> Element {
    let client = use_client();

    let image = client
        .config()
        .recipe_image_url(recipe.photo.as_deref())
        .or_else(|| recipe.static_image().map(str::to_string));
    let href = format!("/recettes/{}", recipe.id);
    let difficulty = recipe.difficulty.as_ref().map(|d| d.label().to_string());
    let badge_class = match difficulty.as_deref() {
        Some("Facile") => "badge easy",
        Some("Difficile") => "badge hard",
        _ => "badge medium",
    };
    let minutes = recipe.prep_minutes.unwrap_or(0);

    rsx! {
        Link {
            to: href,
            class: "recipe-card",
            div {
                class: "recipe-card-image",
                {match image {
                    Some(src) => rsx! { SafeImage { src: src, alt: recipe.title.clone() } },
                    None => rsx! { div { class: "image-placeholder", "Aucune image" } },
                }}
                div {
                    class: "recipe-card-favorite",
                    FavoriteButton {
                        recipe_id: recipe.id.clone(),
                        is_favorite: recipe.is_favorite,
                        on_change: move |fav| {
                            if let Some(handler) = &on_favorite_change {
                                handler.call(fav);
                            }
                        },
                    }
                }
                if let Some(label) = difficulty {
                    span { class: badge_class, "{label}" }
                }
            }
            div {
                class: "recipe-card-body",
                h3 { class: "recipe-card-title", "{recipe.title}" }
                p { class: "recipe-card-description", "{recipe.description}" }
                div {
                    class: "recipe-card-meta",
                    span {
                        class: "meta-item",
                        Icon { icon: FaClock, width: 14, height: 14 }
                        " {minutes} min"
                    }
                    StarRating { rating: recipe.rating(), size: 14 }
                }
                div {
                    class: "recipe-card-author",
                    Icon { icon: FaUser, width: 12, height: 12 }
                    " {recipe.author_name()}"
                }
            }
        }
    }
}
