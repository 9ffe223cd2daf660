//! # Recipe model
//!
//! [`Recipe`] is what the list, search, detail, favorites and "my recipes"
//! endpoints return. [`RecipeDraft`] is the create/update payload built from
//! the recipe form; it carries no id, rating, author or photo because the
//! backend owns those (the photo goes through a separate multipart upload).
//!
//! The author comes back either populated (`{ "_id", "prenom", "nom" }`) or as a
//! bare id string depending on the endpoint; [`AuthorRef`] accepts both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    format_date, lenient_count, lenient_date, lenient_float, null_default, record_id, string_or_number,
    RatingSummary,
};

/// Difficulty level. Values outside the three known levels are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "Facile",
            Difficulty::Medium => "Moyen",
            Difficulty::Hard => "Difficile",
            Difficulty::Other(s) => s,
        }
    }

    /// Parse a form value; the empty string means "not chosen".
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().is_empty() {
            None
        } else {
            Some(Self::from(s.trim().to_string()))
        }
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Facile" => Difficulty::Easy,
            "Moyen" => Difficulty::Medium,
            "Difficile" => Difficulty::Hard,
            _ => Difficulty::Other(s),
        }
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.label().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "nom", default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "quantite", default, deserialize_with = "string_or_number")]
    pub quantity: String,
    #[serde(rename = "unite", default, deserialize_with = "null_default")]
    pub unit: String,
}

/// A populated author.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    #[serde(rename = "prenom", default, deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(rename = "nom", default, deserialize_with = "null_default")]
    pub last_name: String,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Two-letter avatar text: first letter of each name, `?` for a missing last name.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next().map(String::from).unwrap_or_default();
        let last = self.last_name.chars().next().map(String::from).unwrap_or_else(|| "?".to_string());
        format!("{first}{last}")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Populated(Author),
    Id(String),
}

impl AuthorRef {
    pub fn id(&self) -> &str {
        match self {
            AuthorRef::Populated(a) => &a.id,
            AuthorRef::Id(id) => id,
        }
    }

    /// Full name or `fallback` when the author is unknown or unnamed.
    pub fn display_name(author: Option<&AuthorRef>, fallback: &str) -> String {
        match author {
            Some(AuthorRef::Populated(a)) if !a.full_name().is_empty() => a.full_name(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    #[serde(rename = "titre", default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "etapes", default, deserialize_with = "null_default")]
    pub steps: Vec<String>,
    #[serde(rename = "tempsPreparation", default, deserialize_with = "lenient_count")]
    pub prep_minutes: Option<u32>,
    #[serde(rename = "tempsCuisson", default, deserialize_with = "lenient_count")]
    pub cook_minutes: Option<u32>,
    #[serde(rename = "difficulte", default)]
    pub difficulty: Option<Difficulty>,
    #[serde(rename = "typeCuisine", default)]
    pub cuisine: Option<String>,
    #[serde(rename = "regimeAlimentaire", default, deserialize_with = "null_default")]
    pub diets: Vec<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub calories: Option<u32>,
    #[serde(rename = "noteMoyenne", default, deserialize_with = "lenient_float")]
    pub average_rating: Option<f64>,
    #[serde(rename = "nombreAvis", default, deserialize_with = "lenient_count")]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub photo: Option<String>,
    /// Bundled static image, used by the offline fallback list.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "auteur", default)]
    pub author: Option<AuthorRef>,
    #[serde(rename = "dateCreation", default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "isFavorite", default, deserialize_with = "null_default")]
    pub is_favorite: bool,
    #[serde(rename = "userRating", default, deserialize_with = "lenient_count")]
    pub user_rating: Option<u8>,
}

impl Recipe {
    pub fn rating(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }

    pub fn reviews(&self) -> u32 {
        self.review_count.unwrap_or(0)
    }

    pub fn total_minutes(&self) -> u32 {
        self.prep_minutes.unwrap_or(0) + self.cook_minutes.unwrap_or(0)
    }

    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().map(AuthorRef::id)
    }

    pub fn author_name(&self) -> String {
        AuthorRef::display_name(self.author.as_ref(), "Utilisateur anonyme")
    }

    pub fn created_label(&self) -> Option<String> {
        format_date(self.created_at.as_ref())
    }

    /// A bundled asset path usable when there is no uploaded photo.
    pub fn static_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| i.starts_with('/'))
    }

    /// Fold a new rating by the current viewer into the displayed average.
    ///
    /// Server figures win when present. Otherwise the average is recomputed
    /// locally, counting a new review only if the viewer had not rated before.
    pub fn apply_rating(&mut self, rating: u8, previous: u8, summary: &RatingSummary) {
        let count = self.reviews();
        let new_count = if previous == 0 { count + 1 } else { count };
        let local_average =
            (self.rating() * f64::from(count) + f64::from(rating)) / f64::from(new_count.max(1));

        self.average_rating = Some(summary.average.filter(|a| *a > 0.0).unwrap_or(local_average));
        self.review_count = Some(summary.count.filter(|c| *c > 0).unwrap_or(new_count));
        self.user_rating = Some(rating);
    }
}

/// Create/update payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecipeDraft {
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "etapes")]
    pub steps: Vec<String>,
    #[serde(rename = "tempsPreparation")]
    pub prep_minutes: u32,
    #[serde(rename = "tempsCuisson", skip_serializing_if = "Option::is_none")]
    pub cook_minutes: Option<u32>,
    #[serde(rename = "difficulte")]
    pub difficulty: Difficulty,
    #[serde(rename = "typeCuisine")]
    pub cuisine: String,
    #[serde(rename = "regimeAlimentaire")]
    pub diets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NDOLE: &str = r#"{
        "_id": "68d3c179fe79ecbdac4d751e",
        "titre": "Ndolé",
        "description": "Feuilles amères et pâte d'arachide",
        "ingredients": [{"nom": "Ndolé", "quantite": 500, "unite": "g"}, {"nom": "Sel", "quantite": "1", "unite": null}],
        "etapes": ["Laver", "Cuire"],
        "tempsPreparation": 45,
        "tempsCuisson": null,
        "difficulte": "Moyen",
        "typeCuisine": "Camerounaise",
        "regimeAlimentaire": null,
        "noteMoyenne": 4.5,
        "nombreAvis": 2,
        "photo": "ndole.jpg",
        "auteur": {"_id": "u1", "prenom": "Pierre", "nom": "Eto"},
        "dateCreation": "2025-03-14T09:30:00.000Z"
    }"#;

    #[test]
    fn test_decode_backend_recipe() {
        let recipe: Recipe = serde_json::from_str(NDOLE).unwrap();
        assert_eq!(recipe.title, "Ndolé");
        assert_eq!(recipe.ingredients[0].quantity, "500");
        assert_eq!(recipe.ingredients[1].unit, "");
        assert!(recipe.diets.is_empty());
        assert_eq!(recipe.difficulty, Some(Difficulty::Medium));
        assert_eq!(recipe.total_minutes(), 45);
        assert_eq!(recipe.author_id(), Some("u1"));
        assert_eq!(recipe.author_name(), "Pierre Eto");
        assert_eq!(recipe.created_label().as_deref(), Some("14/03/2025"));
    }

    #[test]
    fn test_author_as_bare_id_and_bad_date() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"_id":"r1","titre":"Eru","auteur":"u7","dateCreation":"hier","difficulte":"Expert"}"#,
        )
        .unwrap();
        assert_eq!(recipe.author_id(), Some("u7"));
        assert_eq!(recipe.author_name(), "Utilisateur anonyme");
        assert!(recipe.created_at.is_none());
        assert_eq!(recipe.difficulty, Some(Difficulty::Other("Expert".to_string())));
    }

    #[test]
    fn test_draft_field_mapping() {
        let draft = RecipeDraft {
            title: "Poulet DG".into(),
            description: "Poulet et plantains".into(),
            ingredients: vec![Ingredient { name: "Poulet".into(), quantity: "1".into(), unit: "kg".into() }],
            steps: vec!["Frire".into()],
            prep_minutes: 60,
            cook_minutes: None,
            difficulty: Difficulty::Medium,
            cuisine: "Camerounaise".into(),
            diets: vec![],
            calories: Some(650),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["titre"], "Poulet DG");
        assert_eq!(json["ingredients"][0]["nom"], "Poulet");
        assert_eq!(json["ingredients"][0]["quantite"], "1");
        assert_eq!(json["etapes"][0], "Frire");
        assert_eq!(json["tempsPreparation"], 60);
        assert_eq!(json["difficulte"], "Moyen");
        assert_eq!(json["typeCuisine"], "Camerounaise");
        assert_eq!(json["calories"], 650);
        assert!(json.get("tempsCuisson").is_none());
    }

    #[test]
    fn test_apply_rating_prefers_server_summary() {
        let mut recipe: Recipe = serde_json::from_str(NDOLE).unwrap();
        recipe.apply_rating(3, 0, &RatingSummary { average: Some(4.0), count: Some(3) });
        assert_eq!(recipe.average_rating, Some(4.0));
        assert_eq!(recipe.review_count, Some(3));
        assert_eq!(recipe.user_rating, Some(3));
    }

    #[test]
    fn test_apply_rating_local_fallback() {
        let mut recipe: Recipe = serde_json::from_str(NDOLE).unwrap();
        // (4.5 * 2 + 3) / 3 = 4.0, one more review
        recipe.apply_rating(3, 0, &RatingSummary::default());
        assert_eq!(recipe.average_rating, Some(4.0));
        assert_eq!(recipe.review_count, Some(3));

        // re-rating does not add a review
        let mut recipe: Recipe = serde_json::from_str(NDOLE).unwrap();
        recipe.apply_rating(5, 4, &RatingSummary::default());
        assert_eq!(recipe.review_count, Some(2));
    }

    #[test]
    fn test_decode_virtual_id_and_float_numbers() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "_id": "r1",
                "id": "r1",
                "titre": "Eru",
                "tempsPreparation": 30.0,
                "calories": 350.5,
                "nombreAvis": 2.0,
                "userRating": 4,
                "auteur": {"_id": "u1", "id": "u1", "prenom": "Pierre", "nom": "Eto"}
            }"#,
        )
        .unwrap();
        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.prep_minutes, Some(30));
        assert_eq!(recipe.calories, Some(351));
        assert_eq!(recipe.reviews(), 2);
        assert_eq!(recipe.user_rating, Some(4));
        assert_eq!(recipe.author_id(), Some("u1"));
        assert_eq!(recipe.author_name(), "Pierre Eto");
    }

    #[test]
    fn test_decode_plain_id_key() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 7, "auteur": "u3"}"#).unwrap();
        assert_eq!(recipe.id, "7");
        assert_eq!(recipe.author_id(), Some("u3"));
    }

    #[test]
    fn test_initials() {
        let author = Author { id: "u".into(), first_name: "Awa".into(), last_name: String::new() };
        assert_eq!(author.initials(), "A?");
    }
}
