use api::forms::{check_photo, FieldErrors, PasswordForm, ProfileForm};
use api::{ProfileTab, Recipe};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::icons::{FaPenToSquare, FaRightFromBracket, FaTrash, FaUpload};
use ui::photo::read_picked_file;
use ui::toast::{toast_error, toast_success, use_toasts};
use ui::views::ConfirmDialog;
use ui::{sign_out, use_auth, use_client, AuthState, Icon, RecipeCard, SafeImage};

use super::{use_require_login, CardSkeletons, FieldMessage, PasswordField};
use crate::Route;

#[component]
pub fn Profile(tab: ProfileTab) -> Element {
    use_require_login("/profil".to_string());
    let client = use_client();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let user_id = use_memo(move || auth().user().map(|u| u.id.clone()));
    let mut own_recipes = use_signal(|| Option::<Vec<Recipe>>::None);
    let mut favorites = use_signal(|| Option::<Vec<Recipe>>::None);
    let mut pending_delete = use_signal(|| Option::<String>::None);
    let mut confirm_logout = use_signal(|| false);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let user_id = user_id();
            async move {
                let Some(user_id) = user_id else {
                    return;
                };
                match client.my_recipes(&user_id).await {
                    Ok(list) => own_recipes.set(Some(list)),
                    Err(e) => {
                        tracing::error!("Loading own recipes failed: {}", e);
                        own_recipes.set(Some(Vec::new()));
                        if !e.is_unauthorized() {
                            toast_error(&mut toasts, "Une erreur est survenue lors du chargement de vos données");
                        }
                    }
                }
                match client.favorites().await {
                    Ok(list) => favorites.set(Some(list)),
                    Err(e) => {
                        tracing::error!("Loading favorites failed: {}", e);
                        favorites.set(Some(Vec::new()));
                    }
                }
            }
        }
    });

    let delete_recipe = use_callback({
        let client = client.clone();
        move |recipe_id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_recipe(&recipe_id).await {
                    Ok(()) => {
                        for list in [&mut own_recipes, &mut favorites] {
                            if let Some(items) = list.write().as_mut() {
                                items.retain(|r| r.id != recipe_id);
                            }
                        }
                        toast_success(&mut toasts, "Recette supprimée avec succès");
                    }
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        tracing::error!("Deleting recipe {} failed: {}", recipe_id, e);
                        toast_error(
                            &mut toasts,
                            &e.user_message("Une erreur est survenue lors de la suppression de la recette"),
                        );
                    }
                }
            });
        }
    });

    let on_photo = {
        let client = client.clone();
        move |evt: FormEvent| {
            let client = client.clone();
            spawn(async move {
                let Some(file) = read_picked_file(evt).await else {
                    return;
                };
                if let Err(message) = check_photo(&file) {
                    toast_error(&mut toasts, message);
                    return;
                }
                match client.change_profile_photo(file).await {
                    Ok(user) => {
                        auth.set(AuthState::signed_in(user));
                        toast_success(&mut toasts, "Photo de profil mise à jour avec succès !");
                    }
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        tracing::error!("Profile photo upload failed: {}", e);
                        toast_error(
                            &mut toasts,
                            &e.user_message("Erreur lors de la mise à jour de la photo de profil"),
                        );
                    }
                }
            });
        }
    };

    let state = auth();
    let Some(user) = state.user().cloned() else {
        return rsx! { p { class: "empty-state", "Chargement du profil..." } };
    };
    let avatar = client.config().user_image_url(user.photo.as_deref());
    let tab_class = |t: ProfileTab| if t == tab { "tab active" } else { "tab" };

    rsx! {
        section {
            class: "profile-header",
            SafeImage {
                src: avatar,
                alt: user.display_name(),
                class: "profile-avatar",
                fallback: api::images::DEFAULT_USER_IMAGE.to_string(),
            }
            div {
                h1 { "{user.display_name()}" }
                p { class: "hint", "{user.email}" }
                label { class: "upload-button",
                    Icon { icon: FaUpload, width: 12, height: 12 }
                    " Changer la photo"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "visually-hidden",
                        onchange: on_photo,
                    }
                }
            }
        }

        nav {
            class: "tabs",
            Link { to: Route::Profile { tab: ProfileTab::Recipes }, class: tab_class(ProfileTab::Recipes), "Mes recettes" }
            Link { to: Route::Profile { tab: ProfileTab::Favorites }, class: tab_class(ProfileTab::Favorites), "Favoris" }
            Link { to: Route::Profile { tab: ProfileTab::Settings }, class: tab_class(ProfileTab::Settings), "Paramètres" }
        }

        {match tab {
            ProfileTab::Recipes => rsx! {
                div { class: "section-header",
                    h2 { "Recettes publiées" }
                    Link { to: Route::AddRecipe {}, "Ajouter une recette" }
                }
                {match own_recipes() {
                    None => rsx! { CardSkeletons { count: 3 } },
                    Some(list) if list.is_empty() => rsx! {
                        p { class: "empty-state", "Aucune recette publiée" }
                    },
                    Some(list) => rsx! {
                        div { class: "recipe-grid",
                            for recipe in list {
                                div { key: "{recipe.id}", class: "owned-recipe",
                                    RecipeCard { recipe: recipe.clone() }
                                    div { class: "owned-recipe-actions",
                                        Link { to: Route::EditRecipe { id: recipe.id.clone() }, class: "button outline-link",
                                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                            " Modifier"
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let id = recipe.id.clone();
                                                move |_| pending_delete.set(Some(id.clone()))
                                            },
                                            Icon { icon: FaTrash, width: 12, height: 12 }
                                            " Supprimer"
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            },
            ProfileTab::Favorites => rsx! {
                h2 { "Recettes favorites" }
                {match favorites() {
                    None => rsx! { CardSkeletons { count: 3 } },
                    Some(list) if list.is_empty() => rsx! {
                        p { class: "empty-state", "Aucune recette en favoris" }
                    },
                    Some(list) => rsx! {
                        div { class: "recipe-grid",
                            for recipe in list {
                                RecipeCard {
                                    key: "{recipe.id}",
                                    on_favorite_change: {
                                        let id = recipe.id.clone();
                                        move |still_favorite: bool| {
                                            if !still_favorite {
                                                if let Some(items) = favorites.write().as_mut() {
                                                    items.retain(|r| r.id != id);
                                                }
                                            }
                                        }
                                    },
                                    recipe: recipe.clone(),
                                }
                            }
                        }
                    },
                }}
            },
            ProfileTab::Settings => rsx! {
                ProfileSettings { key: "{user.id}", user: user.clone() }
                PasswordSettings {}
                section { class: "form-section",
                    h2 { "Session" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| confirm_logout.set(true),
                        Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                        " Se déconnecter"
                    }
                }
            },
        }}

        if let Some(recipe_id) = pending_delete() {
            ConfirmDialog {
                title: "Supprimer la recette",
                message: "Êtes-vous sûr de vouloir supprimer cette recette ?",
                confirm_label: "Supprimer",
                on_confirm: move |_| {
                    delete_recipe.call(recipe_id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }

        if confirm_logout() {
            ConfirmDialog {
                title: "Déconnexion",
                message: "Êtes-vous sûr de vouloir vous déconnecter ?",
                confirm_label: "Se déconnecter",
                on_confirm: {
                    let client = client.clone();
                    move |_| {
                        confirm_logout.set(false);
                        sign_out(&client, &mut auth);
                        toast_success(&mut toasts, "Déconnexion réussie");
                        nav.push(Route::Home {});
                    }
                },
                on_cancel: move |_| confirm_logout.set(false),
            }
        }
    }
}

#[component]
fn ProfileSettings(user: api::User) -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let mut form = use_signal(|| ProfileForm::from_user(&user));
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form.peek().clone();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        let client = client.clone();
        saving.set(true);
        spawn(async move {
            match client.save_profile(&current.update()).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    toast_success(&mut toasts, "Profil mis à jour avec succès !");
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    tracing::error!("Profile update failed: {}", e);
                    toast_error(
                        &mut toasts,
                        &e.user_message("Une erreur est survenue lors de la mise à jour du profil"),
                    );
                }
            }
            saving.set(false);
        });
    };

    let values = form();
    let errs = errors();

    rsx! {
        section {
            class: "form-section",
            h2 { "Informations personnelles" }
            form {
                novalidate: true,
                onsubmit: onsubmit,
                div { class: "field-row",
                    div { class: "field",
                        Label { html_for: "profile_first_name", "Prénom" }
                        Input {
                            id: "profile_first_name",
                            invalid: errs.get("first_name").is_some(),
                            value: values.first_name.clone(),
                            oninput: move |evt: FormEvent| {
                                form.write().first_name = evt.value();
                                errors.write().clear("first_name");
                            },
                        }
                        FieldMessage { errors: errs.clone(), field: "first_name" }
                    }
                    div { class: "field",
                        Label { html_for: "profile_last_name", "Nom" }
                        Input {
                            id: "profile_last_name",
                            invalid: errs.get("last_name").is_some(),
                            value: values.last_name.clone(),
                            oninput: move |evt: FormEvent| {
                                form.write().last_name = evt.value();
                                errors.write().clear("last_name");
                            },
                        }
                        FieldMessage { errors: errs.clone(), field: "last_name" }
                    }
                }
                div { class: "field",
                    Label { html_for: "profile_email", "Email" }
                    Input {
                        id: "profile_email",
                        r#type: "email",
                        invalid: errs.get("email").is_some(),
                        value: values.email.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().email = evt.value();
                            errors.write().clear("email");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "email" }
                }
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Enregistrement..." } else { "Enregistrer" }
                }
            }
        }
    }
}

#[component]
fn PasswordSettings() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut form = use_signal(PasswordForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form.peek().clone();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        let client = client.clone();
        saving.set(true);
        spawn(async move {
            match client.change_password(&current.change()).await {
                Ok(()) => {
                    form.set(PasswordForm::default());
                    toast_success(&mut toasts, "Mot de passe mis à jour avec succès");
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    tracing::error!("Password update failed: {}", e);
                    toast_error(
                        &mut toasts,
                        &e.user_message("Une erreur est survenue lors de la mise à jour du mot de passe"),
                    );
                }
            }
            saving.set(false);
        });
    };

    let values = form();
    let errs = errors();

    rsx! {
        section {
            class: "form-section",
            h2 { "Mot de passe" }
            form {
                novalidate: true,
                onsubmit: onsubmit,
                div { class: "field",
                    Label { html_for: "current_password", "Mot de passe actuel" }
                    PasswordField {
                        id: "current_password",
                        invalid: errs.get("current_password").is_some(),
                        value: values.current_password.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().current_password = evt.value();
                            errors.write().clear("current_password");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "current_password" }
                }
                div { class: "field",
                    Label { html_for: "new_password", "Nouveau mot de passe" }
                    PasswordField {
                        id: "new_password",
                        autocomplete: "new-password",
                        invalid: errs.get("new_password").is_some(),
                        value: values.new_password.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().new_password = evt.value();
                            errors.write().clear("new_password");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "new_password" }
                }
                div { class: "field",
                    Label { html_for: "confirm_new_password", "Confirmer le nouveau mot de passe" }
                    PasswordField {
                        id: "confirm_new_password",
                        autocomplete: "new-password",
                        invalid: errs.get("confirm_password").is_some(),
                        value: values.confirm_password.clone(),
                        oninput: move |evt: FormEvent| {
                            form.write().confirm_password = evt.value();
                            errors.write().clear("confirm_password");
                        },
                    }
                    FieldMessage { errors: errs.clone(), field: "confirm_password" }
                }
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Mise à jour..." } else { "Changer le mot de passe" }
                }
            }
        }
    }
}
