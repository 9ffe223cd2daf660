use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default)] id: String,
    #[props(default)] title: String,
    #[props(default)] invalid: bool,
    #[props(extends = input)]
    attributes: Vec<Attribute>,
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
) -> Element {
    let classes = if invalid { format!("input invalid {class}") } else { format!("input {class}") };

    rsx! {
        input {
            id: (!id.is_empty()).then(|| id.clone()),
            title: (!title.is_empty()).then(|| title.clone()),
            class: "{classes}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}
