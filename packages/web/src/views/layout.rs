use dioxus::prelude::*;
use ui::{Footer, Navbar};

use crate::Route;

/// Shell shared by every page: navbar, routed content, footer.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "app-shell",
            Navbar {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
