use dioxus::prelude::*;

#[component]
pub fn Textarea(
    #[props(default)] class: String,
    #[props(default)] id: String,
    #[props(default)] title: String,
    #[props(default)] invalid: bool,
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let classes = if invalid { format!("textarea invalid {class}") } else { format!("textarea {class}") };

    rsx! {
        textarea {
            id: (!id.is_empty()).then(|| id.clone()),
            title: (!title.is_empty()).then(|| title.clone()),
            class: "{classes}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}
