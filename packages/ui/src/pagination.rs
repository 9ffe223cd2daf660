use api::pagination::{page_items, PageItem};
use api::RecipeQuery;
use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

fn page_href(query: &RecipeQuery, page: u32) -> String {
    let rendered = query.with_page(page).to_string();
    if rendered.is_empty() {
        "/recettes".to_string()
    } else {
        format!("/recettes?{rendered}")
    }
}

/// Page links for the recipe list. Renders nothing for a single page.
#[component]
pub fn PaginationBar(query: RecipeQuery, total_pages: u32) -> Element {
    let current = query.page.max(1);
    let items = page_items(current, total_pages);
    if items.is_empty() {
        return rsx! {};
    }

    let previous = (current > 1).then(|| page_href(&query, current - 1));
    let next = (current < total_pages).then(|| page_href(&query, current + 1));

    rsx! {
        nav {
            class: "pagination",
            aria_label: "Pagination",
            if let Some(href) = previous {
                Link { to: href, class: "page-link", title: "Page précédente",
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                }
            }
            for (index, item) in items.into_iter().enumerate() {
                {match item {
                    PageItem::Page(page) => {
                        let class = if page == current { "page-link current" } else { "page-link" };
                        rsx! {
                            Link { key: "{index}", to: page_href(&query, page), class: class, "{page}" }
                        }
                    }
                    PageItem::Ellipsis => rsx! {
                        span { key: "{index}", class: "page-ellipsis", "…" }
                    },
                }}
            }
            if let Some(href) = next {
                Link { to: href, class: "page-link", title: "Page suivante",
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_href_keeps_filters() {
        let query = RecipeQuery::from("categorie=Camerounaise&q=poulet&page=3");
        assert_eq!(page_href(&query, 4), "/recettes?categorie=Camerounaise&q=poulet&page=4");
        assert_eq!(page_href(&query, 1), "/recettes?categorie=Camerounaise&q=poulet");
        assert_eq!(page_href(&RecipeQuery::default(), 1), "/recettes");
    }
}
