use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

/// Five stars, filled up to `rating`.
///
/// Interactive ratings highlight on hover and report the clicked value
/// through `on_rate`; read-only ones print the average next to the stars.
#[component]
pub fn StarRating(
    rating: f64,
    #[props(default)] interactive: bool,
    #[props(default = 16)] size: u32,
    on_rate: Option<EventHandler<u8>>,
) -> Element {
    let mut hovered = use_signal(|| 0u8);

    let shown = if interactive && hovered() > 0 { f64::from(hovered()) } else { rating };
    let wrapper = if interactive { "star-rating interactive" } else { "star-rating" };

    rsx! {
        div {
            class: wrapper,
            onmouseleave: move |_| hovered.set(0),
            for value in 1..=5u8 {
                button {
                    key: "{value}",
                    r#type: "button",
                    class: if f64::from(value) <= shown { "star filled" } else { "star" },
                    disabled: !interactive,
                    title: "{value}/5",
                    onmouseenter: move |_| {
                        if interactive {
                            hovered.set(value);
                        }
                    },
                    onclick: move |_| {
                        if interactive {
                            if let Some(handler) = &on_rate {
                                handler.call(value);
                            }
                        }
                    },
                    Icon { icon: FaStar, width: size, height: size }
                }
            }
            if !interactive && rating > 0.0 {
                span { class: "star-value", "({rating:.1})" }
            }
        }
    }
}
