use api::forms::RecipeForm;
use api::{AuthQuery, FileUpload, Recipe, RecipeQuery};
use dioxus::prelude::*;
use ui::toast::{toast_error, toast_success, use_toasts};
use ui::{use_auth, use_client, RecipeEditor};

use super::use_require_login;
use crate::Route;

#[component]
pub fn EditRecipe(id: String) -> Element {
    use_require_login(format!("/recettes/{id}/modifier"));
    let client = use_client();
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let config = client.config().clone();
    let mut submitting = use_signal(|| false);
    let mut recipe = use_signal(|| Option::<Recipe>::None);

    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = id_signal();
            async move {
                match client.recipe(&id).await {
                    Ok(found) => recipe.set(Some(found)),
                    Err(e) => {
                        tracing::error!("Loading recipe {} for editing failed: {}", id, e);
                        toast_error(&mut toasts, &e.user_message("Impossible de charger la recette"));
                        nav.replace(Route::recipes(RecipeQuery::default()));
                    }
                }
            }
        }
    });

    // Only the author or an admin may stay on this page.
    use_effect(move || {
        let state = auth();
        let Some(user) = state.user() else {
            return;
        };
        if let Some(current) = recipe() {
            if !user.can_edit(current.author_id()) {
                toast_error(&mut toasts, "Vous n'êtes pas autorisé à modifier cette recette");
                nav.replace(Route::RecipeDetail { id: current.id.clone() });
            }
        }
    });

    let on_submit = move |(form, photo): (RecipeForm, Option<FileUpload>)| {
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(_) => {
                toast_error(&mut toasts, "Veuillez corriger les erreurs du formulaire");
                return;
            }
        };
        let client = client.clone();
        let id = id_signal.peek().clone();
        let with_photo = photo.is_some();
        submitting.set(true);
        spawn(async move {
            let result = client.publish_recipe(Some(&id), &draft, photo).await;
            submitting.set(false);
            match result {
                Ok(published) => {
                    toast_success(&mut toasts, "Recette mise à jour avec succès");
                    if published.photo_error.is_some() {
                        toast_error(&mut toasts, "La recette a été mise à jour mais l'upload de la photo a échoué");
                    } else if with_photo {
                        toast_success(&mut toasts, "Photo de la recette mise à jour avec succès");
                    }
                    nav.push(Route::RecipeDetail { id: published.id });
                }
                Err(e) if e.is_unauthorized() => {
                    toast_error(
                        &mut toasts,
                        "Vous n'êtes pas autorisé à effectuer cette action. Veuillez vous reconnecter.",
                    );
                    nav.push(Route::login(AuthQuery::redirect_to(&format!("/recettes/{id}/modifier"))));
                }
                Err(e) => {
                    tracing::error!("Updating recipe {} failed: {}", id, e);
                    toast_error(
                        &mut toasts,
                        &e.user_message("Une erreur est survenue lors de la mise à jour de la recette"),
                    );
                }
            }
        });
    };

    let Some(current) = recipe() else {
        return rsx! { p { class: "empty-state", "Chargement de la recette..." } };
    };
    let current_photo = config.recipe_image_url(current.photo.as_deref());

    rsx! {
        h1 { "Modifier la recette" }
        RecipeEditor {
            key: "{current.id}",
            initial: RecipeForm::from_recipe(&current),
            submit_label: "Enregistrer les modifications",
            submitting: submitting(),
            current_photo: current_photo,
            on_submit: on_submit,
            on_cancel: move |_| nav.go_back(),
        }
    }
}
