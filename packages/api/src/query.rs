//! # URL query state
//!
//! The recipe list and the auth pages keep their state in the query string so
//! links and reloads reproduce the same view. The router carries each key as
//! its own route argument; these types gather them back into one value.
//! [`RecipeQuery`] also renders itself as query text for plain `href`s.
//!
//! | Type | Route | Keys |
//! |------|-------|------|
//! | [`RecipeQuery`] | `/recettes` | `page`, `q`, `categorie`, `difficulte`, `regime`, `tempsMax`, `caloriesMax`, `ingredients` |
//! | [`AuthQuery`] | `/connexion`, `/inscription` | `redirect`, `session` |
//! | [`ProfileTab`] | `/profil` | `tab` |

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

/// Recipes per page on the list page.
pub const PAGE_SIZE: u32 = 9;

/// Filters, search text and page of the recipe list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeQuery {
    pub page: u32,
    pub q: String,
    /// Cuisine type, sent to the backend as `typeCuisine`.
    pub category: String,
    pub difficulty: String,
    /// Diet tag, sent as `regimeAlimentaire`.
    pub diet: String,
    pub max_minutes: String,
    pub max_calories: String,
    pub ingredients: String,
}

impl Default for RecipeQuery {
    fn default() -> Self {
        Self {
            page: 1,
            q: String::new(),
            category: String::new(),
            difficulty: String::new(),
            diet: String::new(),
            max_minutes: String::new(),
            max_calories: String::new(),
            ingredients: String::new(),
        }
    }
}

impl RecipeQuery {
    /// Filter fields in URL order, without `q` and `page`.
    fn filters(&self) -> [(&'static str, &str); 6] {
        [
            ("categorie", &self.category),
            ("difficulte", &self.difficulty),
            ("regime", &self.diet),
            ("tempsMax", &self.max_minutes),
            ("caloriesMax", &self.max_calories),
            ("ingredients", &self.ingredients),
        ]
    }

    /// Parameters for `GET /recettes/recherche`; empty values are dropped by
    /// the request builder.
    pub fn search_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.max(1).to_string()),
            ("limit", PAGE_SIZE.to_string()),
            ("typeCuisine", self.category.clone()),
            ("difficulte", self.difficulty.clone()),
            ("regimeAlimentaire", self.diet.clone()),
            ("q", self.q.clone()),
            ("tempsMax", self.max_minutes.clone()),
            ("caloriesMax", self.max_calories.clone()),
            ("ingredients", self.ingredients.clone()),
        ]
    }

    /// Heading for the list page, from the most specific active filter.
    pub fn title(&self) -> String {
        if !self.category.is_empty() {
            format!("Recettes de cuisine {}", self.category)
        } else if !self.difficulty.is_empty() {
            format!("Recettes {}s", self.difficulty.to_lowercase())
        } else if !self.diet.is_empty() {
            format!("Recettes {}", self.diet)
        } else if !self.q.is_empty() {
            format!("Résultats pour \"{}\"", self.q)
        } else {
            "Toutes les recettes".to_string()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    /// New search text, back to the first page.
    pub fn with_search(&self, q: &str) -> Self {
        Self { q: q.trim().to_string(), page: 1, ..self.clone() }
    }

    /// Filters applied from the panel: keeps `q`, restarts at page 1.
    pub fn applied(&self) -> Self {
        Self { page: 1, ..self.clone() }
    }

    /// All filters cleared; only the search text survives.
    pub fn reset(&self) -> Self {
        Self { q: self.q.clone(), ..Self::default() }
    }
}

impl From<&str> for RecipeQuery {
    fn from(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "page" => parsed.page = value.parse().ok().filter(|p| *p > 0).unwrap_or(1),
                "q" => parsed.q = value,
                "categorie" => parsed.category = value,
                "difficulte" => parsed.difficulty = value,
                "regime" => parsed.diet = value,
                "tempsMax" => parsed.max_minutes = value,
                "caloriesMax" => parsed.max_calories = value,
                "ingredients" => parsed.ingredients = value,
                _ => {}
            }
        }
        parsed
    }
}

impl fmt::Display for RecipeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.filters() {
            if !value.is_empty() {
                out.append_pair(key, value);
            }
        }
        if !self.q.is_empty() {
            out.append_pair("q", &self.q);
        }
        if self.page > 1 {
            out.append_pair("page", &self.page.to_string());
        }
        // The router decodes percent escapes but not `+`.
        f.write_str(&out.finish().replace('+', "%20"))
    }
}

/// Query of the login and registration pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthQuery {
    /// Where to go after a successful sign-in.
    pub redirect: Option<String>,
    /// Set by the unauthorized redirect (`session=expired`).
    pub session_expired: bool,
}

impl AuthQuery {
    pub fn redirect_to(path: &str) -> Self {
        Self { redirect: Some(path.to_string()), session_expired: false }
    }

    /// Builds the query from the `redirect` and `session` route arguments.
    pub fn from_args(redirect: &str, session: &str) -> Self {
        Self {
            redirect: Some(redirect.to_string()).filter(|r| !r.is_empty()),
            session_expired: session == "expired",
        }
    }

    /// The `redirect` and `session` route arguments, empty when unset.
    pub fn args(&self) -> (String, String) {
        let session = if self.session_expired { "expired" } else { "" };
        (self.redirect.clone().unwrap_or_default(), session.to_string())
    }

    /// The redirect target, limited to paths within the app.
    pub fn target(&self) -> String {
        self.redirect
            .as_deref()
            .filter(|r| r.starts_with('/') && !r.starts_with("//"))
            .unwrap_or("/")
            .to_string()
    }
}

/// Active tab of the profile page (`/profil?tab=...`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Recipes,
    Favorites,
    Settings,
}

impl ProfileTab {
    fn key(&self) -> &'static str {
        match self {
            ProfileTab::Recipes => "recettes",
            ProfileTab::Favorites => "favoris",
            ProfileTab::Settings => "parametres",
        }
    }
}

impl FromStr for ProfileTab {
    type Err = Infallible;

    /// Unknown keys open the default tab.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "favoris" => ProfileTab::Favorites,
            "parametres" => ProfileTab::Settings,
            _ => ProfileTab::Recipes,
        })
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parameters for the plain `GET /recettes` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Backend sort key, `-` prefix for descending.
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub author: Option<String>,
}

impl ListParams {
    pub fn sorted(sort: &str, limit: u32) -> Self {
        Self { sort: Some(sort.to_string()), limit: Some(limit), ..Self::default() }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(author) = &self.author {
            pairs.push(("auteur", author.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let query = RecipeQuery::from("?categorie=Camerounaise&q=poulet%20dg&page=3&unknown=1");
        assert_eq!(query.category, "Camerounaise");
        assert_eq!(query.q, "poulet dg");
        assert_eq!(query.page, 3);
        assert_eq!(query.to_string(), "categorie=Camerounaise&q=poulet%20dg&page=3");
        assert_eq!(RecipeQuery::from(query.to_string().as_str()), query);
    }

    #[test]
    fn test_bad_page_reads_as_first() {
        assert_eq!(RecipeQuery::from("page=0").page, 1);
        assert_eq!(RecipeQuery::from("page=abc").page, 1);
        assert_eq!(RecipeQuery::from("").page, 1);
    }

    #[test]
    fn test_title_priority() {
        let mut query = RecipeQuery { q: "ndolé".into(), ..RecipeQuery::default() };
        assert_eq!(query.title(), "Résultats pour \"ndolé\"");
        query.diet = "Végétarien".into();
        assert_eq!(query.title(), "Recettes Végétarien");
        query.difficulty = "Facile".into();
        assert_eq!(query.title(), "Recettes faciles");
        query.category = "africaine".into();
        assert_eq!(query.title(), "Recettes de cuisine africaine");
        assert_eq!(RecipeQuery::default().title(), "Toutes les recettes");
    }

    #[test]
    fn test_apply_and_reset_filters() {
        let query = RecipeQuery::from("difficulte=Moyen&tempsMax=30&q=eru&page=4");
        assert_eq!(query.applied().to_string(), "difficulte=Moyen&tempsMax=30&q=eru");
        assert_eq!(query.reset().to_string(), "q=eru");
        assert_eq!(query.reset().max_minutes, "");
        assert_eq!(query.with_page(2).page, 2);
        assert_eq!(query.with_search("  poulet ").q, "poulet");
    }

    #[test]
    fn test_search_params_mapping() {
        let query = RecipeQuery::from("categorie=africaine&regime=Sans%20gluten&caloriesMax=500");
        let params = query.search_params();
        assert!(params.contains(&("typeCuisine", "africaine".into())));
        assert!(params.contains(&("regimeAlimentaire", "Sans gluten".into())));
        assert!(params.contains(&("caloriesMax", "500".into())));
        assert!(params.contains(&("page", "1".into())));
        assert!(params.contains(&("limit", "9".into())));
    }

    #[test]
    fn test_auth_query() {
        let query = AuthQuery::from_args("/ajouter-recette", "expired");
        assert_eq!(query.target(), "/ajouter-recette");
        assert!(query.session_expired);
        assert_eq!(query.args(), ("/ajouter-recette".to_string(), "expired".to_string()));
        assert_eq!(AuthQuery::redirect_to("//evil.example").target(), "/");
        assert_eq!(AuthQuery::default().target(), "/");
        assert_eq!(AuthQuery::from_args("", ""), AuthQuery::default());
        assert_eq!(AuthQuery::default().args(), (String::new(), String::new()));
    }

    #[test]
    fn test_profile_tab() {
        assert_eq!("favoris".parse::<ProfileTab>(), Ok(ProfileTab::Favorites));
        assert_eq!("parametres".parse::<ProfileTab>(), Ok(ProfileTab::Settings));
        assert_eq!("".parse::<ProfileTab>(), Ok(ProfileTab::Recipes));
        assert_eq!(ProfileTab::Favorites.to_string(), "favoris");
        assert_eq!(ProfileTab::Recipes.to_string(), "recettes");
    }

    #[test]
    fn test_list_params() {
        assert_eq!(
            ListParams::sorted("-noteMoyenne", 3).pairs(),
            vec![("sort", "-noteMoyenne".to_string()), ("limit", "3".to_string())]
        );
    }
}
