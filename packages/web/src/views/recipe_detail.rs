use api::{AuthQuery, Comment, Recipe, RecipeQuery};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Textarea};
use ui::icons::{FaArrowLeft, FaClock, FaComment, FaEye, FaEyeSlash, FaPenToSquare, FaUser};
use ui::toast::{toast_error, toast_success, use_toasts};
use ui::views::ConfirmDialog;
use ui::{use_auth, use_client, CommentItem, FavoriteButton, Icon, SafeImage, StarRating};

use crate::Route;

#[component]
pub fn RecipeDetail(id: String) -> Element {
    let client = use_client();
    let auth = use_auth();
    let mut toasts = use_toasts();

    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut recipe = use_signal(|| Option::<Recipe>::None);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut show_comments = use_signal(|| true);
    let mut new_comment = use_signal(String::new);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = id_signal();
            async move {
                recipe.set(None);
                load_error.set(None);
                match client.recipe(&id).await {
                    Ok(found) => recipe.set(Some(found)),
                    Err(e) => {
                        tracing::error!("Loading recipe {} failed: {}", id, e);
                        load_error.set(Some(
                            e.user_message("Une erreur est survenue lors du chargement de la recette."),
                        ));
                        return;
                    }
                }
                match client.comments(&id).await {
                    Ok(list) => comments.set(list),
                    Err(e) => {
                        tracing::warn!("Loading comments for {} failed: {}", id, e);
                        comments.set(Vec::new());
                    }
                }
            }
        }
    });

    let rate = use_callback({
        let client = client.clone();
        move |note: u8| {
            if !auth.peek().is_logged_in() {
                toast_error(&mut toasts, "Veuillez vous connecter pour noter cette recette");
                return;
            }
            let client = client.clone();
            let id = id_signal.peek().clone();
            spawn(async move {
                match client.rate_recipe(&id, note).await {
                    Ok(summary) => {
                        if let Some(current) = recipe.write().as_mut() {
                            let previous = current.user_rating.unwrap_or(0);
                            current.apply_rating(note, previous, &summary);
                        }
                        toast_success(&mut toasts, "Merci pour votre évaluation !");
                    }
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        tracing::error!("Rating recipe {} failed: {}", id, e);
                        toast_error(&mut toasts, &e.user_message("Une erreur est survenue lors de la notation"));
                    }
                }
            });
        }
    });

    let add_comment = use_callback({
        let client = client.clone();
        move |_: ()| {
            if !auth.peek().is_logged_in() {
                toast_error(&mut toasts, "Veuillez vous connecter pour ajouter un commentaire");
                return;
            }
            let content = new_comment.peek().trim().to_string();
            if content.is_empty() {
                toast_error(&mut toasts, "Le commentaire ne peut pas être vide");
                return;
            }
            let client = client.clone();
            let id = id_signal.peek().clone();
            spawn(async move {
                match client.add_comment(&id, &content).await {
                    Ok(created) => {
                        comments.write().insert(0, created);
                        new_comment.set(String::new());
                        toast_success(&mut toasts, "Commentaire ajouté avec succès");
                    }
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        tracing::error!("Adding comment failed: {}", e);
                        toast_error(
                            &mut toasts,
                            &e.user_message("Une erreur est survenue lors de l'ajout du commentaire"),
                        );
                    }
                }
            });
        }
    });

    let save_comment = use_callback({
        let client = client.clone();
        move |(comment_id, content): (String, String)| {
            let content = content.trim().to_string();
            if content.is_empty() {
                toast_error(&mut toasts, "Le commentaire ne peut pas être vide");
                return;
            }
            let client = client.clone();
            spawn(async move {
                match client.update_comment(&comment_id, &content).await {
                    Ok(()) => {
                        if let Some(c) = comments.write().iter_mut().find(|c| c.id == comment_id) {
                            c.content = content;
                        }
                        toast_success(&mut toasts, "Commentaire modifié avec succès");
                    }
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        tracing::error!("Updating comment {} failed: {}", comment_id, e);
                        toast_error(
                            &mut toasts,
                            &e.user_message("Une erreur est survenue lors de la modification du commentaire"),
                        );
                    }
                }
            });
        }
    });

    let delete_comment = use_callback({
        let client = client.clone();
        move |comment_id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_comment(&comment_id).await {
                    Ok(()) => {
                        comments.write().retain(|c| c.id != comment_id);
                        toast_success(&mut toasts, "Commentaire supprimé avec succès");
                    }
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        tracing::error!("Deleting comment {} failed: {}", comment_id, e);
                        toast_error(
                            &mut toasts,
                            &e.user_message("Une erreur est survenue lors de la suppression du commentaire"),
                        );
                    }
                }
            });
        }
    });

    if let Some(message) = load_error() {
        return rsx! {
            div { class: "error-state",
                h2 { "Erreur" }
                p { "{message}" }
                Link { to: Route::recipes(RecipeQuery::default()), "Retour aux recettes" }
            }
        };
    }
    let Some(current) = recipe() else {
        return rsx! { p { class: "empty-state", "Chargement de la recette..." } };
    };

    let state = auth();
    let viewer = state.user().cloned();
    let can_edit = viewer.as_ref().is_some_and(|u| u.can_edit(current.author_id()));
    let image = client
        .config()
        .recipe_image_url(current.photo.as_deref())
        .or_else(|| current.static_image().map(str::to_string));
    let difficulty = current.difficulty.as_ref().map(|d| d.label().to_string());
    let created = current.created_label();
    let comment_list = comments();
    let comment_count = comment_list.len();

    rsx! {
        Link { to: Route::recipes(RecipeQuery::default()), class: "back-link",
            Icon { icon: FaArrowLeft, width: 12, height: 12 }
            " Retour aux recettes"
        }

        section {
            class: "recipe-hero",
            div {
                {match image {
                    Some(src) => rsx! { SafeImage { src: src, alt: current.title.clone() } },
                    None => rsx! { div { class: "image-placeholder", "Aucune image disponible pour cette recette" } },
                }}
            }
            div {
                h1 { "{current.title}" }
                p { "{current.description}" }
                div { class: "recipe-facts",
                    span { class: "meta-item",
                        Icon { icon: FaUser, width: 12, height: 12 }
                        " {current.author_name()}"
                    }
                    if let Some(date) = created {
                        span { class: "meta-item", "Publiée le {date}" }
                    }
                    if let Some(label) = difficulty {
                        span { class: "tag", "{label}" }
                    }
                    if let Some(cuisine) = current.cuisine.clone() {
                        span { class: "tag", "{cuisine}" }
                    }
                }
                div { class: "recipe-facts",
                    span { class: "meta-item",
                        Icon { icon: FaClock, width: 12, height: 12 }
                        " Préparation : {current.prep_minutes.unwrap_or(0)} min"
                    }
                    if let Some(cook) = current.cook_minutes {
                        span { class: "meta-item", "Cuisson : {cook} min" }
                    }
                    span { class: "meta-item", "Total : {current.total_minutes()} min" }
                    if let Some(calories) = current.calories {
                        span { class: "meta-item", "{calories} kcal par portion" }
                    }
                }
                if !current.diets.is_empty() {
                    div {
                        for diet in current.diets.iter() {
                            span { key: "{diet}", class: "tag", "{diet}" }
                        }
                    }
                }
                div { class: "recipe-facts",
                    StarRating { rating: current.rating() }
                    span { "{current.reviews()} avis" }
                }
                div { class: "recipe-facts",
                    FavoriteButton {
                        key: "{current.id}",
                        recipe_id: current.id.clone(),
                        is_favorite: current.is_favorite,
                        with_label: true,
                    }
                    if can_edit {
                        Link { to: Route::EditRecipe { id: current.id.clone() }, class: "button outline-link",
                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                            " Modifier"
                        }
                    }
                }
                div {
                    p { class: "label", "Notez cette recette :" }
                    StarRating {
                        rating: f64::from(current.user_rating.unwrap_or(0)),
                        interactive: true,
                        size: 22,
                        on_rate: move |note| rate.call(note),
                    }
                }
            }
        }

        section {
            class: "recipe-columns",
            div {
                h2 { "Ingrédients" }
                if current.ingredients.is_empty() {
                    p { class: "hint", "Aucun ingrédient disponible" }
                }
                ul {
                    for (i, ingredient) in current.ingredients.iter().enumerate() {
                        li { key: "{i}",
                            strong { "{ingredient.quantity} {ingredient.unit}" }
                            " {ingredient.name}"
                        }
                    }
                }
            }
            div {
                h2 { "Instructions" }
                if current.steps.is_empty() {
                    p { class: "hint", "Aucune instruction disponible" }
                }
                ol { class: "steps",
                    for (i, step) in current.steps.iter().enumerate() {
                        li { key: "{i}", "{step}" }
                    }
                }
            }
        }

        section {
            class: "comments",
            div { class: "section-header",
                h2 {
                    Icon { icon: FaComment, width: 16, height: 16 }
                    " Commentaires ({comment_count})"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| show_comments.toggle(),
                    if show_comments() {
                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                        " Masquer"
                    } else {
                        Icon { icon: FaEye, width: 14, height: 14 }
                        " Afficher"
                    }
                }
            }
            if show_comments() {
                if state.is_logged_in() {
                    form {
                        class: "comment-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            add_comment.call(());
                        },
                        Textarea {
                            rows: 3,
                            placeholder: "Partagez votre avis sur cette recette...",
                            value: new_comment(),
                            oninput: move |evt: FormEvent| new_comment.set(evt.value()),
                        }
                        Button { r#type: "submit", "Publier" }
                    }
                } else {
                    p { class: "hint",
                        Link { to: Route::login(AuthQuery::redirect_to(&format!("/recettes/{}", current.id))), "Connectez-vous" }
                        " pour laisser un commentaire."
                    }
                }
                if comment_list.is_empty() {
                    p { class: "hint", "Aucun commentaire pour le moment. Soyez le premier !" }
                }
                ul {
                    for comment in comment_list.into_iter() {
                        CommentItem {
                            key: "{comment.id}",
                            can_manage: viewer.as_ref().is_some_and(|u| comment.is_written_by(&u.id)),
                            on_save: {
                                let comment_id = comment.id.clone();
                                move |content: String| save_comment.call((comment_id.clone(), content))
                            },
                            on_delete: {
                                let comment_id = comment.id.clone();
                                move |_| pending_delete.set(Some(comment_id.clone()))
                            },
                            comment: comment.clone(),
                        }
                    }
                }
            }
        }

        if let Some(comment_id) = pending_delete() {
            ConfirmDialog {
                title: "Supprimer le commentaire",
                message: "Êtes-vous sûr de vouloir supprimer ce commentaire ?",
                confirm_label: "Supprimer",
                on_confirm: move |_| {
                    delete_comment.call(comment_id.clone());
                    pending_delete.set(None);
                },
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
