//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod client;
pub use client::{make_client, use_client, Client};

pub mod views;

pub const SAVEURS_CSS: Asset = asset!("/assets/saveurs.css");

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod auth;
pub use auth::{sign_out, use_auth, AuthProvider, AuthState, LogoutButton};

pub mod toast;
pub use toast::{toast, toast_error, toast_success, use_toasts, LogLevel, ToastProvider};

pub mod photo;

mod safe_image;
pub use safe_image::SafeImage;

mod star_rating;
pub use star_rating::StarRating;

mod favorite_button;
pub use favorite_button::FavoriteButton;

mod recipe_card;
pub use recipe_card::RecipeCard;

mod recipe_filters;
pub use recipe_filters::RecipeFilters;

mod pagination;
pub use pagination::PaginationBar;

mod recipe_form;
pub use recipe_form::RecipeEditor;

mod comment_item;
pub use comment_item::CommentItem;
