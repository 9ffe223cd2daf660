//! # HTTP transport seam
//!
//! [`ApiClient`](crate::ApiClient) builds [`ApiRequest`] values and hands them
//! to a [`Transport`]. The production implementation is [`ReqwestTransport`]
//! (browser `fetch` on wasm32, hyper natively); tests swap in a recording
//! double so request sequences can be asserted without a server.
//!
//! Transports do not interpret status codes. Any response that arrives, 4xx
//! and 5xx included, is returned as an [`ApiResponse`]; only failures to get a
//! response at all become [`ApiError::Transport`].

use std::fmt;
use std::future::Future;

use url::Url;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A file picked by the user, sent as one multipart field.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// Multipart form with a single file part named `field`.
    Multipart { field: String, file: FileUpload },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the API base, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    /// Filled in by the client from the session store just before sending.
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Body::Empty,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append query pairs, skipping empty values.
    pub fn query<K, V, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in pairs {
            let v = v.into();
            if !v.is_empty() {
                self.query.push((k.into(), v));
            }
        }
        self
    }

    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Body::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn file(mut self, field: &str, file: FileUpload) -> Self {
        self.body = Body::Multipart { field: field.to_string(), file };
        self
    }

    /// Absolute URL of this request below `base`.
    pub fn url(&self, base: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), self.path))
            .map_err(|e| ApiError::Transport(format!("invalid URL for {}: {e}", self.path)))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// [`Transport`] over `reqwest`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url(&self.base_url)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart { field, file } => {
                let part = reqwest::multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(transport_error)?;
                builder.multipart(reqwest::multipart::Form::new().part(field, part))
            }
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_query() {
        let req = ApiRequest::get("/recettes/recherche").query([
            ("page", "2"),
            ("q", "ndolé & co"),
            ("difficulte", ""),
        ]);
        assert_eq!(req.query.len(), 2);
        let url = req.url("http://localhost:5000/api/").unwrap();
        assert_eq!(url.path(), "/api/recettes/recherche");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[1], ("q".to_string(), "ndolé & co".to_string()));
    }

    #[test]
    fn test_url_without_query() {
        let url = ApiRequest::delete("/commentaires/c1").url("http://api.test/api").unwrap();
        assert_eq!(url.as_str(), "http://api.test/api/commentaires/c1");
    }

    #[test]
    fn test_json_body() {
        let req = ApiRequest::put("/recettes/r1/noter").json(&serde_json::json!({ "note": 4 })).unwrap();
        assert_eq!(req.body, Body::Json(serde_json::json!({ "note": 4 })));
        assert_eq!(req.method.to_string(), "PUT");
    }
}
