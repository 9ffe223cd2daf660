//! # REST client
//!
//! [`ApiClient`] is the one place requests are built. Every call:
//!
//! 1. reads the bearer token from the [`SessionStore`] at send time,
//! 2. hands the request to the [`Transport`],
//! 3. on **401** clears the stored session, fires the unauthorized hook once
//!    and returns [`ApiError::Unauthorized`],
//! 4. maps other non-2xx statuses to [`ApiError::Server`] with the body's
//!    `message`, and `{ "success": false }` envelopes to [`ApiError::Rejected`],
//! 5. unwraps the `data` envelope when present (the backend is not consistent
//!    about wrapping, so bare payloads are accepted too).
//!
//! ## Endpoints
//!
//! | Method | Call |
//! |--------|------|
//! | [`list_recipes`](ApiClient::list_recipes) | `GET /recettes` |
//! | [`search_recipes`](ApiClient::search_recipes) | `GET /recettes/recherche` |
//! | [`recipe`](ApiClient::recipe) | `GET /recettes/:id` |
//! | [`create_recipe`](ApiClient::create_recipe) / [`update_recipe`](ApiClient::update_recipe) / [`delete_recipe`](ApiClient::delete_recipe) | `POST /recettes`, `PUT`/`DELETE /recettes/:id` |
//! | [`rate_recipe`](ApiClient::rate_recipe) | `PUT /recettes/:id/noter` |
//! | [`toggle_favorite`](ApiClient::toggle_favorite) / [`favorites`](ApiClient::favorites) | `PUT /recettes/:id/favoris`, `GET /recettes/favoris` |
//! | [`my_recipes`](ApiClient::my_recipes) | `GET /utilisateurs/me/recettes`, falling back to `GET /recettes?auteur=` |
//! | [`upload_recipe_photo`](ApiClient::upload_recipe_photo) | `PUT /recettes/:id/photo` (multipart `file`) |
//! | [`register`](ApiClient::register) / [`login`](ApiClient::login) / [`logout`](ApiClient::logout) | `/auth/inscription`, `/auth/connexion`, `/auth/deconnexion` |
//! | [`profile`](ApiClient::profile) / [`update_profile`](ApiClient::update_profile) / [`update_profile_photo`](ApiClient::update_profile_photo) / [`update_password`](ApiClient::update_password) | `/auth/profil`, `/auth/profil/photo`, `/auth/password` |
//! | [`comments`](ApiClient::comments) / [`add_comment`](ApiClient::add_comment) | `GET`/`POST /recettes/:id/commentaires` |
//! | [`update_comment`](ApiClient::update_comment) / [`delete_comment`](ApiClient::delete_comment) | `PUT`/`DELETE /commentaires/:id` |

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use store::{KeyValueStore, SessionStore};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AuthSession, Comment, Credentials, Page, PasswordChange, ProfileUpdate, RatingSummary,
    Recipe, RecipeDraft, Registration, User,
};
use crate::query::{ListParams, RecipeQuery};
use crate::transport::{ApiRequest, FileUpload, Transport};

/// Multipart field name the backend reads uploads from.
pub const UPLOAD_FIELD: &str = "file";

/// Outcome of [`ApiClient::publish_recipe`].
#[derive(Debug, PartialEq)]
pub struct Published {
    /// Id of the created or updated recipe.
    pub id: String,
    /// Set when the recipe was saved but its photo upload failed.
    pub photo_error: Option<ApiError>,
}

#[derive(Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    session: SessionStore<S>,
    config: ApiConfig,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, store: S, config: ApiConfig) -> Self {
        Self {
            transport,
            session: SessionStore::new(store),
            config,
            on_unauthorized: None,
        }
    }

    /// Called after a 401 has cleared the stored session.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    async fn send(&self, mut request: ApiRequest) -> Result<Value, ApiError> {
        request.bearer = self.session.token();
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!("{} {}", method, path);

        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::error!("{} {} failed: {}", method, path, e);
        })?;

        if response.status == 401 {
            tracing::warn!("{} {} answered 401, clearing session", method, path);
            self.session.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }

        if !response.is_success() {
            let body = serde_json::from_str(&response.body).unwrap_or(Value::Null);
            let message = message_of(&body);
            tracing::warn!("{} {} answered {}: {:?}", method, path, response.status, message);
            return Err(ApiError::Server { status: response.status, message });
        }

        let body = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body)?
        };
        if body.get("success") == Some(&Value::Bool(false)) {
            let message = message_of(&body).unwrap_or_default();
            tracing::warn!("{} {} rejected: {}", method, path, message);
            return Err(ApiError::Rejected(message));
        }
        Ok(body)
    }

    // -- recipes ----------------------------------------------------------

    pub async fn list_recipes(&self, params: &ListParams) -> Result<Page<Recipe>, ApiError> {
        let body = self.send(ApiRequest::get("/recettes").query(params.pairs())).await?;
        decode_page(body)
    }

    pub async fn search_recipes(&self, query: &RecipeQuery) -> Result<Page<Recipe>, ApiError> {
        let request = ApiRequest::get("/recettes/recherche").query(query.search_params());
        decode_page(self.send(request).await?)
    }

    pub async fn recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        decode(self.send(ApiRequest::get(format!("/recettes/{id}"))).await?)
    }

    pub async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        decode(self.send(ApiRequest::post("/recettes").json(draft)?).await?)
    }

    pub async fn update_recipe(&self, id: &str, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        decode(self.send(ApiRequest::put(format!("/recettes/{id}")).json(draft)?).await?)
    }

    pub async fn delete_recipe(&self, id: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::delete(format!("/recettes/{id}"))).await?;
        Ok(())
    }

    /// Rate a recipe 1..=5. The summary is empty when the backend sends none.
    pub async fn rate_recipe(&self, id: &str, note: u8) -> Result<RatingSummary, ApiError> {
        let request = ApiRequest::put(format!("/recettes/{id}/noter")).json(&json!({ "note": note }))?;
        let body = self.send(request).await?;
        Ok(serde_json::from_value(payload(body)).unwrap_or_default())
    }

    pub async fn toggle_favorite(&self, id: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::put(format!("/recettes/{id}/favoris"))).await?;
        Ok(())
    }

    /// The viewer's favorites, each flagged `is_favorite`.
    pub async fn favorites(&self) -> Result<Vec<Recipe>, ApiError> {
        let mut recipes: Vec<Recipe> = decode_list(self.send(ApiRequest::get("/recettes/favoris")).await?)?;
        for recipe in &mut recipes {
            recipe.is_favorite = true;
        }
        Ok(recipes)
    }

    /// Recipes authored by `user_id`.
    ///
    /// Uses the dedicated endpoint and falls back to filtering the general
    /// list by author when that fails. A 401 is not retried.
    pub async fn my_recipes(&self, user_id: &str) -> Result<Vec<Recipe>, ApiError> {
        match self.send(ApiRequest::get("/utilisateurs/me/recettes")).await {
            Ok(body) => decode_list(body),
            Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
            Err(e) => {
                tracing::warn!("Dedicated user recipes endpoint failed ({}), listing by author", e);
                let params = ListParams { author: Some(user_id.to_string()), ..ListParams::default() };
                Ok(self.list_recipes(&params).await?.items)
            }
        }
    }

    pub async fn upload_recipe_photo(&self, id: &str, photo: FileUpload) -> Result<(), ApiError> {
        let request = ApiRequest::put(format!("/recettes/{id}/photo")).file(UPLOAD_FIELD, photo);
        self.send(request).await?;
        Ok(())
    }

    /// Create (`existing == None`) or update a recipe, then upload `photo`
    /// if one was chosen.
    ///
    /// Exactly one create/update request is sent. A failed photo upload does
    /// not fail the whole operation; it is reported in [`Published::photo_error`].
    pub async fn publish_recipe(
        &self,
        existing: Option<&str>,
        draft: &RecipeDraft,
        photo: Option<FileUpload>,
    ) -> Result<Published, ApiError> {
        let id = match existing {
            None => self.create_recipe(draft).await?.id,
            Some(id) => {
                let request = ApiRequest::put(format!("/recettes/{id}")).json(draft)?;
                self.send(request).await?;
                id.to_string()
            }
        };
        if id.is_empty() {
            return Err(ApiError::MissingData);
        }

        let photo_error = match photo {
            Some(photo) => self.upload_recipe_photo(&id, photo).await.err(),
            None => None,
        };
        if let Some(e) = &photo_error {
            tracing::error!("Recipe {} saved but photo upload failed: {}", id, e);
        }
        Ok(Published { id, photo_error })
    }

    // -- auth -------------------------------------------------------------

    pub async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        let body = self.send(ApiRequest::post("/auth/inscription").json(registration)?).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let body = self.send(ApiRequest::post("/auth/connexion").json(credentials)?).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(ApiRequest::get("/auth/deconnexion")).await?;
        Ok(())
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        decode(self.send(ApiRequest::get("/auth/profil")).await?)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        decode(self.send(ApiRequest::put("/auth/profil").json(update)?).await?)
    }

    pub async fn update_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.send(ApiRequest::put("/auth/password").json(change)?).await?;
        Ok(())
    }

    pub async fn update_profile_photo(&self, photo: FileUpload) -> Result<(), ApiError> {
        self.send(ApiRequest::put("/auth/profil/photo").file(UPLOAD_FIELD, photo)).await?;
        Ok(())
    }

    // -- comments ---------------------------------------------------------

    pub async fn comments(&self, recipe_id: &str) -> Result<Vec<Comment>, ApiError> {
        decode_list(self.send(ApiRequest::get(format!("/recettes/{recipe_id}/commentaires"))).await?)
    }

    pub async fn add_comment(&self, recipe_id: &str, content: &str) -> Result<Comment, ApiError> {
        let request = ApiRequest::post(format!("/recettes/{recipe_id}/commentaires"))
            .json(&json!({ "contenu": content }))?;
        decode(self.send(request).await?)
    }

    pub async fn update_comment(&self, id: &str, content: &str) -> Result<(), ApiError> {
        let request = ApiRequest::put(format!("/commentaires/{id}")).json(&json!({ "contenu": content }))?;
        self.send(request).await?;
        Ok(())
    }

    pub async fn delete_comment(&self, id: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::delete(format!("/commentaires/{id}"))).await?;
        Ok(())
    }
}

fn message_of(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).map(str::to_string)
}

/// The `data` member of an envelope, or the body itself when unwrapped.
fn payload(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

fn decode<R: DeserializeOwned>(body: Value) -> Result<R, ApiError> {
    let data = payload(body);
    if data.is_null() {
        return Err(ApiError::MissingData);
    }
    Ok(serde_json::from_value(data)?)
}

fn decode_list<R: DeserializeOwned>(body: Value) -> Result<Vec<R>, ApiError> {
    match payload(body) {
        Value::Null => Ok(Vec::new()),
        data => Ok(serde_json::from_value(data)?),
    }
}

fn count_at(body: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .find_map(|k| body.get(*k).and_then(Value::as_f64))
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round() as u64)
}

/// `{ data: [...], total, page, pages }`, `{ data: [...], count }` or a bare array.
fn decode_page<R: DeserializeOwned>(body: Value) -> Result<Page<R>, ApiError> {
    let total = count_at(&body, &["total", "count"]);
    let page = count_at(&body, &["page"]).and_then(|p| u32::try_from(p).ok()).filter(|p| *p > 0);
    let pages = count_at(&body, &["pages"]).and_then(|p| u32::try_from(p).ok());
    let items: Vec<R> = decode_list(body)?;
    let total = total.unwrap_or(items.len() as u64);
    Ok(Page { page: page.unwrap_or(1), pages, ..Page::new(items, total) })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::MemoryStore;

    use super::*;
    use crate::models::{Difficulty, Ingredient};
    use crate::testing::{client_with, RecordingTransport};
    use crate::transport::{ApiResponse, Body, Method};

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Ndolé".into(),
            description: "Le plat national".into(),
            ingredients: vec![Ingredient { name: "Ndolé".into(), quantity: "500".into(), unit: "g".into() }],
            steps: vec!["Laver les feuilles".into()],
            prep_minutes: 45,
            cook_minutes: Some(30),
            difficulty: Difficulty::Medium,
            cuisine: "Camerounaise".into(),
            diets: vec![],
            calories: None,
        }
    }

    fn photo() -> FileUpload {
        FileUpload { file_name: "ndole.jpg".into(), mime: "image/jpeg".into(), bytes: vec![0xff, 0xd8] }
    }

    fn created() -> ApiResponse {
        ApiResponse::new(201, r#"{"success":true,"data":{"_id":"r42","titre":"Ndolé"}}"#)
    }

    #[tokio::test]
    async fn test_publish_without_photo_sends_one_request() {
        let transport = RecordingTransport::new(|_| created());
        let client = client_with(transport.clone(), MemoryStore::new());

        let published = client.publish_recipe(None, &draft(), None).await.unwrap();
        assert_eq!(published, Published { id: "r42".into(), photo_error: None });

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/recettes");
        let Body::Json(body) = &requests[0].body else { panic!("expected JSON body") };
        assert_eq!(body["titre"], "Ndolé");
        assert_eq!(body["tempsPreparation"], 45);
        assert_eq!(body["tempsCuisson"], 30);
        assert_eq!(body["difficulte"], "Moyen");
        assert_eq!(body["typeCuisine"], "Camerounaise");
        assert!(body.get("calories").is_none());
    }

    #[tokio::test]
    async fn test_publish_with_photo_uploads_after_create() {
        let transport = RecordingTransport::new(|_| created());
        let client = client_with(transport.clone(), MemoryStore::new());

        client.publish_recipe(None, &draft(), Some(photo())).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].path, "/recettes/r42/photo");
        assert!(matches!(&requests[1].body, Body::Multipart { field, .. } if field == "file"));
    }

    #[tokio::test]
    async fn test_photo_failure_does_not_fail_publish() {
        let transport = RecordingTransport::new(|req| {
            if req.path.ends_with("/photo") {
                ApiResponse::new(500, r#"{"message":"disque plein"}"#)
            } else {
                ApiResponse::new(200, r#"{"success":true,"data":{"_id":"r7"}}"#)
            }
        });
        let client = client_with(transport.clone(), MemoryStore::new());

        let published = client.publish_recipe(Some("r7"), &draft(), Some(photo())).await.unwrap();
        assert_eq!(published.id, "r7");
        assert_eq!(
            published.photo_error,
            Some(ApiError::Server { status: 500, message: Some("disque plein".into()) })
        );
        assert_eq!(transport.requests()[0].path, "/recettes/r7");
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_fires_hook_once() {
        let store = MemoryStore::new();
        let transport = RecordingTransport::new(|_| ApiResponse::new(401, r#"{"message":"Token invalide"}"#));
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let client = client_with(transport.clone(), store.clone())
            .with_unauthorized_hook(move || counter.set(counter.get() + 1));
        client.session().save("tok", &serde_json::json!({ "id": "u1" }));

        let err = client.favorites().await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(fired.get(), 1);
        assert!(store.is_empty());
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("tok"));

        // my_recipes must not fall back after a 401
        client.my_recipes("u1").await.unwrap_err();
        assert_eq!(fired.get(), 2);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_envelope() {
        let transport = RecordingTransport::new(|_| {
            ApiResponse::new(200, r#"{"success":false,"message":"Recette introuvable"}"#)
        });
        let client = client_with(transport, MemoryStore::new());
        assert_eq!(
            client.recipe("nope").await.unwrap_err(),
            ApiError::Rejected("Recette introuvable".into())
        );
    }

    #[tokio::test]
    async fn test_search_page_and_params() {
        let transport = RecordingTransport::new(|_| {
            ApiResponse::new(200, r#"{"success":true,"total":19,"data":[{"_id":"a"},{"_id":"b"}]}"#)
        });
        let client = client_with(transport.clone(), MemoryStore::new());
        let query = RecipeQuery::from("page=2&difficulte=Facile&q=poulet");

        let page = client.search_recipes(&query).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages(9), 3);

        let sent = &transport.requests()[0];
        assert_eq!(sent.path, "/recettes/recherche");
        assert!(sent.query.contains(&("limit".into(), "9".into())));
        assert!(sent.query.contains(&("difficulte".into(), "Facile".into())));
        assert!(sent.bearer.is_none());
    }

    #[tokio::test]
    async fn test_my_recipes_falls_back_to_author_filter() {
        let transport = RecordingTransport::new(|req| {
            if req.path == "/utilisateurs/me/recettes" {
                ApiResponse::new(404, "Not Found")
            } else {
                ApiResponse::new(200, r#"{"data":[{"_id":"r1","auteur":"u1"}]}"#)
            }
        });
        let client = client_with(transport.clone(), MemoryStore::new());

        let recipes = client.my_recipes("u1").await.unwrap();
        assert_eq!(recipes.len(), 1);
        let fallback = &transport.requests()[1];
        assert_eq!(fallback.path, "/recettes");
        assert_eq!(fallback.query, vec![("auteur".to_string(), "u1".to_string())]);
    }

    #[tokio::test]
    async fn test_favorites_are_flagged() {
        let transport = RecordingTransport::new(|_| ApiResponse::new(200, r#"{"data":[{"_id":"r1"}]}"#));
        let client = client_with(transport, MemoryStore::new());
        assert!(client.favorites().await.unwrap()[0].is_favorite);
    }

    #[tokio::test]
    async fn test_rate_reads_top_level_summary() {
        let transport = RecordingTransport::new(|_| {
            ApiResponse::new(200, r#"{"success":true,"noteMoyenne":4.5,"nombreAvis":8}"#)
        });
        let client = client_with(transport.clone(), MemoryStore::new());

        let summary = client.rate_recipe("r1", 4).await.unwrap();
        assert_eq!(summary, RatingSummary { average: Some(4.5), count: Some(8) });
        assert_eq!(transport.requests()[0].body, Body::Json(serde_json::json!({ "note": 4 })));
    }

    #[tokio::test]
    async fn test_login_and_logout_endpoints() {
        let transport = RecordingTransport::new(|req| match req.path.as_str() {
            "/auth/connexion" => ApiResponse::new(
                200,
                r#"{"success":true,"token":"t","data":{"_id":"u1","prenom":"Awa","nom":"M","email":"a@b.cm"}}"#,
            ),
            _ => ApiResponse::new(200, r#"{"success":true}"#),
        });
        let client = client_with(transport.clone(), MemoryStore::new());

        let session = client
            .login(&Credentials { email: "a@b.cm".into(), password: "secret1".into() })
            .await
            .unwrap();
        assert_eq!(session.token, "t");
        assert_eq!(session.user.first_name, "Awa");

        client.logout().await.unwrap();
        assert_eq!(transport.requests()[1].path, "/auth/deconnexion");
    }

    #[tokio::test]
    async fn test_comment_endpoints() {
        let transport = RecordingTransport::new(|req| match req.method {
            Method::Post => ApiResponse::new(201, r#"{"_id":"c1","contenu":"Délicieux"}"#),
            _ => ApiResponse::new(200, ""),
        });
        let client = client_with(transport.clone(), MemoryStore::new());

        let comment = client.add_comment("r1", "Délicieux").await.unwrap();
        assert_eq!(comment.content, "Délicieux");
        client.update_comment("c1", "Très bon").await.unwrap();
        client.delete_comment("c1").await.unwrap();
        assert!(client.comments("r1").await.unwrap().is_empty());

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            ["/recettes/r1/commentaires", "/commentaires/c1", "/commentaires/c1", "/recettes/r1/commentaires"]
        );
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let transport = RecordingTransport::failing("connection refused");
        let client = client_with(transport, MemoryStore::new());
        assert_eq!(
            client.profile().await.unwrap_err(),
            ApiError::Transport("connection refused".into())
        );
    }

    #[test]
    fn test_decode_page_shapes() {
        let page: Page<Recipe> = decode_page(serde_json::json!([{ "_id": "a" }])).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, None);
        let page: Page<Recipe> = decode_page(serde_json::json!({ "count": 5, "data": [] })).unwrap();
        assert_eq!(page.total, 5);
        let page: Page<Recipe> =
            decode_page(serde_json::json!({ "total": 19.0, "page": 2, "pages": 3, "data": [] })).unwrap();
        assert_eq!((page.total, page.page, page.pages), (19, 2, Some(3)));
        assert_eq!(decode::<Recipe>(serde_json::json!({ "data": null })).unwrap_err(), ApiError::MissingData);
    }
}
