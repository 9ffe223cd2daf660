use api::forms::RecipeForm;
use api::{AuthQuery, FileUpload};
use dioxus::prelude::*;
use ui::toast::{toast_error, toast_success, use_toasts};
use ui::{use_auth, use_client, RecipeEditor};

use super::use_require_login;
use crate::Route;

const ADD_RECIPE_PATH: &str = "/ajouter-recette";

#[component]
pub fn AddRecipe() -> Element {
    use_require_login(ADD_RECIPE_PATH.to_string());
    let client = use_client();
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut submitting = use_signal(|| false);

    let on_submit = move |(form, photo): (RecipeForm, Option<FileUpload>)| {
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(_) => {
                toast_error(&mut toasts, "Veuillez corriger les erreurs du formulaire");
                return;
            }
        };
        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            let result = client.publish_recipe(None, &draft, photo).await;
            submitting.set(false);
            match result {
                Ok(published) => {
                    if published.photo_error.is_some() {
                        toast_error(&mut toasts, "La recette a été créée mais l'upload de la photo a échoué");
                    } else {
                        toast_success(&mut toasts, "Recette ajoutée avec succès !");
                    }
                    tracing::info!("Recipe {} created", published.id);
                    nav.push(Route::RecipeDetail { id: published.id });
                }
                Err(e) if e.is_unauthorized() => {
                    toast_error(
                        &mut toasts,
                        "Vous n'êtes pas autorisé à effectuer cette action. Veuillez vous reconnecter.",
                    );
                    nav.push(Route::login(AuthQuery::redirect_to(ADD_RECIPE_PATH)));
                }
                Err(e) => {
                    tracing::error!("Creating recipe failed: {}", e);
                    toast_error(
                        &mut toasts,
                        &e.user_message("Une erreur est survenue lors de l'ajout de la recette"),
                    );
                }
            }
        });
    };

    if !auth().is_logged_in() {
        return rsx! { p { class: "empty-state", "Chargement..." } };
    }

    rsx! {
        h1 { "Ajouter une recette" }
        p { class: "hint", "Partagez votre recette avec la communauté SaveursDuKmer." }
        RecipeEditor {
            initial: RecipeForm::default(),
            submit_label: "Publier la recette",
            submitting: submitting(),
            on_submit: on_submit,
            on_cancel: move |_| nav.go_back(),
        }
    }
}
