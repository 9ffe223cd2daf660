//! Recipe editor shared by the add and edit pages.

use api::forms::{check_photo, FieldErrors, RecipeForm, CUISINES, DIETS};
use api::{Difficulty, FileUpload};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::icons::{FaPlus, FaTrash, FaUpload};
use crate::photo::{preview_url, read_picked_file};
use crate::toast::{toast_error, use_toasts};
use crate::{Icon, SafeImage};

/// Error line under a field, if any.
#[component]
fn FieldError(errors: FieldErrors, field: &'static str) -> Element {
    match errors.get(field) {
        Some(message) => rsx! { p { class: "field-error", "{message}" } },
        None => rsx! {},
    }
}

#[component]
pub fn RecipeEditor(
    initial: RecipeForm,
    submit_label: String,
    #[props(default)] submitting: bool,
    // Photo already stored for the recipe, shown until another is picked.
    #[props(default)]
    current_photo: Option<String>,
    on_submit: EventHandler<(RecipeForm, Option<FileUpload>)>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut form = use_signal(|| initial.clone());
    let mut errors = use_signal(FieldErrors::new);
    let mut photo = use_signal(|| Option::<FileUpload>::None);
    let mut toasts = use_toasts();

    let on_photo = move |evt: FormEvent| {
        spawn(async move {
            let Some(file) = read_picked_file(evt).await else {
                return;
            };
            match check_photo(&file) {
                Ok(()) => photo.set(Some(file)),
                Err(message) => {
                    photo.set(None);
                    toast_error(&mut toasts, message);
                }
            }
        });
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form.peek().clone();
        let found = current.validate();
        if !found.is_empty() {
            tracing::debug!("Recipe form has {} invalid fields", found.len());
            errors.set(found);
            toast_error(&mut toasts, "Veuillez corriger les erreurs du formulaire");
            return;
        }
        errors.set(FieldErrors::new());
        on_submit.call((current, photo.peek().clone()));
    };

    let values = form();
    let errs = errors();
    let preview = photo().as_ref().map(preview_url).or(current_photo.clone());

    rsx! {
        form {
            class: "recipe-form",
            novalidate: true,
            onsubmit: onsubmit,

            section { class: "form-section",
                h2 { "Informations générales" }
                div { class: "field",
                    Label { html_for: "title", "Titre de la recette *" }
                    Input {
                        id: "title",
                        invalid: errs.get("title").is_some(),
                        placeholder: "Ex: Ndolé aux crevettes",
                        value: values.title.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().title = evt.value();
                            errors.write().clear("title");
                        },
                    }
                    FieldError { errors: errs.clone(), field: "title" }
                }
                div { class: "field",
                    Label { html_for: "description", "Description *" }
                    Textarea {
                        id: "description",
                        rows: 4,
                        invalid: errs.get("description").is_some(),
                        placeholder: "Décrivez votre recette en quelques lignes",
                        value: values.description.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().description = evt.value();
                            errors.write().clear("description");
                        },
                    }
                    FieldError { errors: errs.clone(), field: "description" }
                }
                div { class: "field-row",
                    div { class: "field",
                        Label { html_for: "prep_minutes", "Temps de préparation (min) *" }
                        Input {
                            id: "prep_minutes",
                            r#type: "number",
                            min: "1",
                            invalid: errs.get("prep_minutes").is_some(),
                            value: values.prep_minutes.clone(),
                            oninput: move |evt: FormEvent| {
                                form.write().prep_minutes = evt.value();
                                errors.write().clear("prep_minutes");
                            },
                        }
                        FieldError { errors: errs.clone(), field: "prep_minutes" }
                    }
                    div { class: "field",
                        Label { html_for: "cook_minutes", "Temps de cuisson (min)" }
                        Input {
                            id: "cook_minutes",
                            r#type: "number",
                            min: "0",
                            invalid: errs.get("cook_minutes").is_some(),
                            value: values.cook_minutes.clone(),
                            oninput: move |evt: FormEvent| {
                                form.write().cook_minutes = evt.value();
                                errors.write().clear("cook_minutes");
                            },
                        }
                        FieldError { errors: errs.clone(), field: "cook_minutes" }
                    }
                    div { class: "field",
                        Label { html_for: "calories", "Calories" }
                        Input {
                            id: "calories",
                            r#type: "number",
                            min: "0",
                            invalid: errs.get("calories").is_some(),
                            value: values.calories.clone(),
                            oninput: move |evt: FormEvent| {
                                form.write().calories = evt.value();
                                errors.write().clear("calories");
                            },
                        }
                        FieldError { errors: errs.clone(), field: "calories" }
                    }
                }
                div { class: "field-row",
                    div { class: "field",
                        Label { html_for: "difficulty", "Difficulté *" }
                        select {
                            id: "difficulty",
                            class: if errs.get("difficulty").is_some() { "select invalid" } else { "select" },
                            onchange: move |evt| {
                                form.write().difficulty = evt.value();
                                errors.write().clear("difficulty");
                            },
                            option { value: "", selected: values.difficulty.is_empty(), "Choisir..." }
                            for level in Difficulty::ALL {
                                option {
                                    key: "{level}",
                                    value: level.label().to_string(),
                                    selected: values.difficulty == level.label(),
                                    "{level}"
                                }
                            }
                        }
                        FieldError { errors: errs.clone(), field: "difficulty" }
                    }
                    div { class: "field",
                        Label { html_for: "cuisine", "Type de cuisine *" }
                        select {
                            id: "cuisine",
                            class: if errs.get("cuisine").is_some() { "select invalid" } else { "select" },
                            onchange: move |evt| {
                                form.write().cuisine = evt.value();
                                errors.write().clear("cuisine");
                            },
                            option { value: "", selected: values.cuisine.is_empty(), "Choisir..." }
                            for cuisine in CUISINES {
                                option { key: "{cuisine}", value: cuisine, selected: values.cuisine == cuisine, "{cuisine}" }
                            }
                        }
                        FieldError { errors: errs.clone(), field: "cuisine" }
                    }
                }
                div { class: "field",
                    span { class: "label", "Régime alimentaire" }
                    div { class: "checkbox-group",
                        for diet in DIETS {
                            label { key: "{diet}", class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: values.diets.iter().any(|d| d == diet),
                                    onchange: move |_| form.write().toggle_diet(diet),
                                }
                                " {diet}"
                            }
                        }
                    }
                }
            }

            section { class: "form-section",
                h2 { "Ingrédients" }
                for (index, ingredient) in values.ingredients.iter().cloned().enumerate() {
                    div { key: "ingredient-{index}", class: "ingredient-row",
                        Input {
                            class: "ingredient-name",
                            placeholder: "Ingrédient",
                            value: ingredient.name.clone(),
                            oninput: move |evt: FormEvent| {
                                if let Some(row) = form.write().ingredients.get_mut(index) {
                                    row.name = evt.value();
                                }
                                errors.write().clear("ingredients");
                            },
                        }
                        Input {
                            class: "ingredient-quantity",
                            placeholder: "Quantité",
                            value: ingredient.quantity.clone(),
                            oninput: move |evt: FormEvent| {
                                if let Some(row) = form.write().ingredients.get_mut(index) {
                                    row.quantity = evt.value();
                                }
                                errors.write().clear("ingredients");
                            },
                        }
                        Input {
                            class: "ingredient-unit",
                            placeholder: "Unité",
                            value: ingredient.unit.clone(),
                            oninput: move |evt: FormEvent| {
                                if let Some(row) = form.write().ingredients.get_mut(index) {
                                    row.unit = evt.value();
                                }
                            },
                        }
                        Button {
                            r#type: "button",
                            variant: ButtonVariant::Ghost,
                            title: "Retirer",
                            disabled: values.ingredients.len() <= 1,
                            onclick: move |_| form.write().remove_ingredient(index),
                            Icon { icon: FaTrash, width: 14, height: 14 }
                        }
                    }
                }
                FieldError { errors: errs.clone(), field: "ingredients" }
                Button {
                    r#type: "button",
                    variant: ButtonVariant::Outline,
                    onclick: move |_| form.write().add_ingredient(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Ajouter un ingrédient"
                }
            }

            section { class: "form-section",
                h2 { "Étapes de préparation" }
                for (index, step) in values.steps.iter().cloned().enumerate() {
                    div { key: "step-{index}", class: "step-row",
                        span { class: "step-number", "{index + 1}" }
                        Textarea {
                            rows: 2,
                            placeholder: "Décrivez cette étape",
                            value: step,
                            oninput: move |evt: FormEvent| {
                                if let Some(row) = form.write().steps.get_mut(index) {
                                    *row = evt.value();
                                }
                                errors.write().clear("steps");
                            },
                        }
                        Button {
                            r#type: "button",
                            variant: ButtonVariant::Ghost,
                            title: "Retirer",
                            disabled: values.steps.len() <= 1,
                            onclick: move |_| form.write().remove_step(index),
                            Icon { icon: FaTrash, width: 14, height: 14 }
                        }
                    }
                }
                FieldError { errors: errs.clone(), field: "steps" }
                Button {
                    r#type: "button",
                    variant: ButtonVariant::Outline,
                    onclick: move |_| form.write().add_step(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Ajouter une étape"
                }
            }

            section { class: "form-section",
                h2 { "Photo" }
                if let Some(src) = preview {
                    SafeImage { src: src, alt: "Aperçu de la recette", class: "photo-preview" }
                }
                label { class: "upload-button",
                    Icon { icon: FaUpload, width: 14, height: 14 }
                    if photo().is_some() { " Changer la photo" } else { " Choisir une photo" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "visually-hidden",
                        onchange: on_photo,
                    }
                }
                p { class: "hint", "JPG, PNG, GIF ou WEBP, 2 Mo maximum." }
            }

            div { class: "form-actions",
                if let Some(cancel) = on_cancel {
                    Button {
                        r#type: "button",
                        variant: ButtonVariant::Outline,
                        onclick: move |_| cancel.call(()),
                        "Annuler"
                    }
                }
                Button {
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Enregistrement..." } else { "{submit_label}" }
                }
            }
        }
    }
}
