//! # Backend endpoints
//!
//! [`ApiConfig`] carries the two base URLs the client needs:
//!
//! | Field | Env var | Default |
//! |-------|---------|---------|
//! | `api_url` | `API_URL` | `http://localhost:5000/api` |
//! | `uploads_url` | `UPLOADS_URL` | `http://localhost:5000/uploads` |
//!
//! Values are captured at compile time (see `build.rs`), so a WASM bundle is
//! built for one backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::images;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_UPLOADS_URL: &str = "http://localhost:5000/uploads";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url", deserialize_with = "trimmed")]
    pub api_url: String,
    #[serde(default = "default_uploads_url", deserialize_with = "trimmed")]
    pub uploads_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_uploads_url() -> String {
    DEFAULT_UPLOADS_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            uploads_url: default_uploads_url(),
        }
    }
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>, uploads_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_base(api_url.into()),
            uploads_url: trim_base(uploads_url.into()),
        }
    }

    /// Config captured from the build environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("UPLOADS_URL").unwrap_or(DEFAULT_UPLOADS_URL),
        )
    }

    pub fn recipe_image_url(&self, photo: Option<&str>) -> Option<String> {
        images::recipe_image_url(&self.uploads_url, photo)
    }

    pub fn user_image_url(&self, photo: Option<&str>) -> String {
        images::user_image_url(&self.uploads_url, photo, images::DEFAULT_USER_IMAGE)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(trim_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.cm/api/", "https://cdn.example.cm/");
        assert_eq!(config.api_url, "https://api.example.cm/api");
        assert_eq!(
            config.recipe_image_url(Some("ndole.jpg")).as_deref(),
            Some("https://cdn.example.cm/recettes/ndole.jpg")
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_deserialized_urls_trimmed() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"api_url":"https://api.example.cm/api/","uploads_url":"https://cdn.example.cm//"}"#)
                .unwrap();
        assert_eq!(config, ApiConfig::new("https://api.example.cm/api", "https://cdn.example.cm"));
    }
}
