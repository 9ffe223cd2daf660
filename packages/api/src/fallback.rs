//! Built-in recipes shown by the list page when the backend is unreachable.

use crate::models::{Author, AuthorRef, Difficulty, Page, Recipe};
use crate::query::RecipeQuery;

fn sample(id: &str, title: &str, description: &str, image: &str, prep: u32, rating: f64, author: (&str, &str)) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: Some(image.to_string()),
        prep_minutes: Some(prep),
        difficulty: Some(Difficulty::Medium),
        average_rating: Some(rating),
        author: Some(AuthorRef::Populated(Author {
            id: String::new(),
            first_name: author.0.to_string(),
            last_name: author.1.to_string(),
        })),
        ..Recipe::default()
    }
}

pub fn fallback_recipes() -> Vec<Recipe> {
    vec![
        sample(
            "1",
            "Ndolé",
            "Le Ndolé est un plat traditionnel camerounais à base de feuilles amères, de pâte d'arachide et de viande ou de poisson.",
            "/images/a2.jpg",
            45,
            4.8,
            ("", "Chef Pierre"),
        ),
        sample(
            "2",
            "Poulet DG",
            "Le Poulet DG (Directeur Général) est un plat prestigieux camerounais composé de poulet, de plantains mûrs et de légumes.",
            "/images/a3.jpg",
            60,
            4.9,
            ("Chef", "Tatiana"),
        ),
        sample(
            "3",
            "Eru",
            "L'Eru est un plat à base de feuilles de Gnetum africanum préparé avec de l'huile de palme, du poisson séché et de la viande.",
            "/images/a4.jpg",
            40,
            4.7,
            ("Chef", "Samuel"),
        ),
    ]
}

/// The built-in recipes narrowed by the search text, cuisine and difficulty.
pub fn filter_fallback(query: &RecipeQuery) -> Page<Recipe> {
    let term = query.q.to_lowercase();
    let items: Vec<Recipe> = fallback_recipes()
        .into_iter()
        .filter(|r| {
            term.is_empty()
                || r.title.to_lowercase().contains(&term)
                || r.description.to_lowercase().contains(&term)
        })
        .filter(|r| {
            query.category.is_empty()
                || r.cuisine.as_deref().is_some_and(|c| c.to_lowercase() == query.category.to_lowercase())
        })
        .filter(|r| {
            query.difficulty.is_empty()
                || r.difficulty.as_ref().is_some_and(|d| d.label() == query.difficulty)
        })
        .collect();
    let total = items.len() as u64;
    Page::new(items, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered() {
        let page = filter_fallback(&RecipeQuery::default());
        assert_eq!(page.total, 3);
        assert_eq!(page.items[0].author_name(), "Chef Pierre");
        assert_eq!(page.items[1].author_name(), "Chef Tatiana");
        assert_eq!(page.items[2].static_image(), Some("/images/a4.jpg"));
    }

    #[test]
    fn test_search_matches_description() {
        let page = filter_fallback(&RecipeQuery::from("q=PLANTAINS"));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Poulet DG");
    }

    #[test]
    fn test_difficulty_and_category() {
        assert_eq!(filter_fallback(&RecipeQuery::from("difficulte=Moyen")).total, 3);
        assert_eq!(filter_fallback(&RecipeQuery::from("difficulte=Facile")).total, 0);
        // the samples carry no cuisine, so any cuisine filter empties the list
        assert_eq!(filter_fallback(&RecipeQuery::from("categorie=camerounaise")).total, 0);
    }
}
