use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = api::models::current_year();

    rsx! {
        footer {
            class: "footer",
            div { class: "footer-columns",
                div {
                    h3 { "SaveursDuKmer" }
                    p { "Découvrez et partagez les meilleures recettes de cuisine camerounaise et africaine." }
                }
                div {
                    h4 { "Catégories" }
                    ul {
                        li { Link { to: "/recettes?categorie=Camerounaise", "Cuisine camerounaise" } }
                        li { Link { to: "/recettes?categorie=Africaine", "Cuisine africaine" } }
                        li { Link { to: "/recettes?regime=V%C3%A9g%C3%A9tarien", "Végétarien" } }
                        li { Link { to: "/recettes?difficulte=Facile", "Recettes faciles" } }
                    }
                }
                div {
                    h4 { "Liens" }
                    ul {
                        li { Link { to: "/recettes", "Toutes les recettes" } }
                        li { Link { to: "/ajouter-recette", "Ajouter une recette" } }
                        li { Link { to: "/about", "À propos" } }
                    }
                }
            }
            p { class: "footer-copyright", "© {year} SaveursDuKmer. Tous droits réservés." }
        }
    }
}
