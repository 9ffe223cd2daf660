use dioxus::prelude::*;

use crate::icons::{FaBars, FaHeart, FaPlus, FaUser, FaUtensils, FaXmark};
use crate::{use_auth, Icon, LogoutButton};

/// Top bar with the brand, main links and the account area.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let mut menu_open = use_signal(|| false);

    let state = auth();
    let menu_class = if menu_open() { "navbar-links open" } else { "navbar-links" };
    let close = move |_| menu_open.set(false);

    rsx! {
        header {
            class: "navbar",
            Link { to: "/", class: "navbar-brand", onclick: close,
                Icon { icon: FaUtensils, width: 20, height: 20 }
                span { "SaveursDuKmer" }
            }
            button {
                class: "navbar-toggle",
                title: "Menu",
                onclick: move |_| menu_open.toggle(),
                if menu_open() {
                    Icon { icon: FaXmark, width: 18, height: 18 }
                } else {
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
            }
            nav {
                class: menu_class,
                Link { to: "/", onclick: close, "Accueil" }
                Link { to: "/recettes", onclick: close, "Recettes" }
                Link { to: "/about", onclick: close, "À propos" }
                if let Some(user) = state.user() {
                    Link { to: "/ajouter-recette", class: "navbar-cta", onclick: close,
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Ajouter une recette"
                    }
                    Link { to: "/profil?tab=favoris", onclick: close,
                        Icon { icon: FaHeart, width: 12, height: 12 }
                        " Favoris"
                    }
                    Link { to: "/profil", onclick: close,
                        Icon { icon: FaUser, width: 12, height: 12 }
                        if user.first_name.is_empty() { " Profil" } else { " {user.first_name}" }
                    }
                    LogoutButton { class: "navbar-logout" }
                } else if !state.loading() {
                    Link { to: "/connexion", class: "navbar-cta", onclick: close, "Connexion" }
                    Link { to: "/inscription", onclick: close, "Inscription" }
                }
            }
        }
    }
}
