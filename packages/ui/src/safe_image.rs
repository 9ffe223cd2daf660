use api::images::{is_renderable_src, PLACEHOLDER_IMAGE};
use dioxus::prelude::*;

/// An `<img>` that falls back to a placeholder when its source is not a
/// usable URL or fails to load.
#[component]
pub fn SafeImage(
    src: String,
    #[props(default)] alt: String,
    #[props(default)] class: String,
    #[props(default = PLACEHOLDER_IMAGE.to_string())] fallback: String,
) -> Element {
    let mut failed = use_signal(|| false);
    let mut last_src = use_signal(|| src.clone());

    // A new source gets a fresh chance to load.
    if *last_src.peek() != src {
        last_src.set(src.clone());
        failed.set(false);
    }

    let shown = if failed() || !is_renderable_src(&src) {
        fallback.clone()
    } else {
        src.clone()
    };

    rsx! {
        img {
            src: "{shown}",
            alt: "{alt}",
            class: "{class}",
            loading: "lazy",
            onerror: move |_| {
                if !failed() {
                    tracing::debug!("Image failed to load, using fallback");
                    failed.set(true);
                }
            },
        }
    }
}
