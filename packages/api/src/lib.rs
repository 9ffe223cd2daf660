//! # API crate: typed client for the SaveursDuKmer backend
//!
//! Everything the pages need to talk to the recipe REST service, kept free of
//! any UI framework so it can be unit-tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per endpoint, bearer token injection, 401 interception, envelope decoding |
//! | [`transport`] | The [`Transport`] seam and its `reqwest` implementation |
//! | [`session`] | Session lifecycle on top of the client: restore on load, sign in/up/out, profile updates |
//! | [`token`] | Reads the `exp` claim of a stored JWT (no signature check) |
//! | [`models`] | Recipes, comments, users and response envelopes, with the backend's French field names |
//! | [`config`] | Compile-time base URLs for the API and uploaded files |
//! | [`images`] | Resolution of photo references into displayable URLs |
//! | [`query`] | Query-string state of the recipe list and auth pages |
//! | [`forms`] | Form models and field validation |
//! | [`pagination`] | Page number lists with ellipses |
//! | [`favorite`] | Optimistic favorite toggle that tolerates out-of-order answers |
//! | [`fallback`] | Built-in recipes for when the backend is unreachable |
//! | [`error`] | [`ApiError`] |

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod favorite;
pub mod forms;
pub mod images;
pub mod models;
pub mod pagination;
pub mod query;
pub mod session;
pub mod token;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, Published};
pub use config::ApiConfig;
pub use error::ApiError;
pub use favorite::FavoriteToggle;
pub use models::{Comment, Difficulty, Recipe, Role, User};
pub use query::{AuthQuery, ListParams, ProfileTab, RecipeQuery, PAGE_SIZE};
pub use session::SessionPhase;
pub use transport::{FileUpload, ReqwestTransport, Transport};
