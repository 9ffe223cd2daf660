//! Response shapes that wrap the records.

use serde::Deserialize;

use super::{lenient_count, lenient_float, User};

/// Token and user returned by login and registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(rename = "data", alias = "user")]
    pub user: User,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages.
    pub total: u64,
    /// 1-based page number the server answered for.
    pub page: u32,
    /// Page count as reported by the server, when it sends one.
    pub pages: Option<u32>,
}

impl<T> Page<T> {
    /// A single first page holding `items` out of `total`.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total, page: 1, pages: None }
    }

    /// The server's page count, or `total` split into pages of `page_size`.
    pub fn total_pages(&self, page_size: u32) -> u32 {
        if let Some(pages) = self.pages {
            return pages;
        }
        if page_size == 0 {
            return 0;
        }
        u32::try_from(self.total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

/// Average and count returned after rating a recipe.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RatingSummary {
    #[serde(rename = "noteMoyenne", default, deserialize_with = "lenient_float")]
    pub average: Option<f64>,
    #[serde(rename = "nombreAvis", default, deserialize_with = "lenient_count")]
    pub count: Option<u32>,
}
