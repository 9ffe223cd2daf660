use api::Comment;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Textarea};
use crate::icons::{FaPenToSquare, FaTrash};
use crate::Icon;

/// One comment, with inline editing for its author.
#[component]
pub fn CommentItem(
    comment: Comment,
    #[props(default)] can_manage: bool,
    on_save: EventHandler<String>,
    on_delete: EventHandler<()>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut text = use_signal(|| comment.content.clone());

    let date = comment.created_label();
    let original = comment.content.clone();

    rsx! {
        li {
            class: "comment",
            div { class: "comment-avatar", "{comment.author_initials()}" }
            div {
                class: "comment-body",
                div { class: "comment-header",
                    strong { "{comment.author_name()}" }
                    span { class: "comment-date", "{date}" }
                }
                if editing() {
                    Textarea {
                        rows: 3,
                        value: text(),
                        oninput: move |evt: FormEvent| text.set(evt.value()),
                    }
                    div { class: "comment-actions",
                        Button {
                            onclick: move |_| {
                                on_save.call(text.peek().clone());
                                editing.set(false);
                            },
                            "Enregistrer"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                text.set(original.clone());
                                editing.set(false);
                            },
                            "Annuler"
                        }
                    }
                } else {
                    p { class: "comment-content", "{comment.content}" }
                    if can_manage {
                        div { class: "comment-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Modifier",
                                onclick: move |_| editing.set(true),
                                Icon { icon: FaPenToSquare, width: 12, height: 12 }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Supprimer",
                                onclick: move |_| on_delete.call(()),
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
        }
    }
}
