use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::{AuthQuery, ProfileTab, RecipeQuery};
use ui::{AuthProvider, ToastProvider};
use views::{
    About, AddRecipe, AppLayout, EditRecipe, Home, Login, NotFound, Profile, RecipeDetail, Recipes,
    Register,
};

mod views;

// Query arguments are named after their URL keys.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(non_snake_case)]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/recettes?:categorie&:difficulte&:regime&:tempsMax&:caloriesMax&:ingredients&:q&:page")]
        Recipes {
            categorie: String,
            difficulte: String,
            regime: String,
            tempsMax: String,
            caloriesMax: String,
            ingredients: String,
            q: String,
            page: u32,
        },
        #[route("/recettes/:id")]
        RecipeDetail { id: String },
        #[route("/recettes/:id/modifier")]
        EditRecipe { id: String },
        #[route("/ajouter-recette")]
        AddRecipe {},
        #[route("/connexion?:redirect&:session")]
        Login { redirect: String, session: String },
        #[route("/inscription?:redirect&:session")]
        Register { redirect: String, session: String },
        #[route("/profil?:tab")]
        Profile { tab: ProfileTab },
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn recipes(query: RecipeQuery) -> Self {
        Route::Recipes {
            categorie: query.category,
            difficulte: query.difficulty,
            regime: query.diet,
            tempsMax: query.max_minutes,
            caloriesMax: query.max_calories,
            ingredients: query.ingredients,
            q: query.q,
            page: query.page.max(1),
        }
    }

    fn login(query: AuthQuery) -> Self {
        let (redirect, session) = query.args();
        Route::Login { redirect, session }
    }

    fn register(query: AuthQuery) -> Self {
        let (redirect, session) = query.args();
        Route::Register { redirect, session }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::SAVEURS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "SaveursDuKmer" }

        ToastProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn africaine_page_two() -> RecipeQuery {
        RecipeQuery { category: "Africaine".into(), page: 2, ..RecipeQuery::default() }
    }

    #[test]
    fn test_recipe_routes_render() {
        let route = Route::recipes(africaine_page_two());
        assert_eq!(
            route.to_string(),
            "/recettes?categorie=Africaine&difficulte=&regime=&tempsMax=&caloriesMax=&ingredients=&q=&page=2"
        );
        assert_eq!(Route::EditRecipe { id: "42".into() }.to_string(), "/recettes/42/modifier");
    }

    #[test]
    fn test_recipe_route_round_trip() {
        let route = Route::recipes(RecipeQuery { q: "poulet dg".into(), ..africaine_page_two() });
        assert_eq!(Route::from_str(&route.to_string()).ok(), Some(route));

        let Ok(Route::Recipes { categorie, regime, page, .. }) =
            Route::from_str("/recettes?categorie=Camerounaise&regime=V%C3%A9g%C3%A9tarien")
        else {
            panic!("footer link did not parse as the recipe list");
        };
        assert_eq!(categorie, "Camerounaise");
        assert_eq!(regime, "Végétarien");
        assert_eq!(page, 0);
    }

    #[test]
    fn test_auth_routes_render() {
        let route = Route::login(AuthQuery::redirect_to("/ajouter-recette"));
        assert_eq!(route.to_string(), "/connexion?redirect=%2Fajouter-recette&session=");
        assert_eq!(Route::from_str(&route.to_string()).ok(), Some(route));
        assert_eq!(
            Route::from_str("/connexion?session=expired").ok(),
            Some(Route::Login { redirect: String::new(), session: "expired".into() })
        );
    }

    #[test]
    fn test_profile_tab_route() {
        let route = Route::Profile { tab: ProfileTab::Favorites };
        assert_eq!(route.to_string(), "/profil?tab=favoris");
        assert_eq!(
            Route::from_str("/profil?tab=parametres").ok(),
            Some(Route::Profile { tab: ProfileTab::Settings })
        );
        assert_eq!(Route::from_str("/profil").ok(), Some(Route::Profile { tab: ProfileTab::Recipes }));
    }
}
