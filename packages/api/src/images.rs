//! # Image URL resolution
//!
//! Photo references coming back from the backend may be absent, a bare file
//! name stored by the upload endpoint, a path to a bundled asset, or an
//! absolute URL. These helpers decide what to hand to an `<img>`.
//!
//! | Input | [`recipe_image_url`] | [`user_image_url`] |
//! |-------|----------------------|--------------------|
//! | `None` / `""` | `None` | the default avatar |
//! | `http…` or `/…` | unchanged | unchanged |
//! | anything else | `<uploads>/recettes/<photo>` | `<uploads>/users/<photo>` |

use url::Url;

pub const DEFAULT_USER_IMAGE: &str = "/images/default-user.svg";
pub const PLACEHOLDER_IMAGE: &str = "/images/default-placeholder.jpg";

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "svg", "webp"];

fn is_ready_url(photo: &str) -> bool {
    photo.starts_with("http") || photo.starts_with('/')
}

pub fn recipe_image_url(uploads_base: &str, photo: Option<&str>) -> Option<String> {
    let photo = photo.filter(|p| !p.is_empty())?;
    if is_ready_url(photo) {
        return Some(photo.to_string());
    }
    Some(format!("{}/recettes/{}", uploads_base.trim_end_matches('/'), photo))
}

pub fn user_image_url(uploads_base: &str, photo: Option<&str>, default: &str) -> String {
    match photo.filter(|p| !p.is_empty()) {
        None => default.to_string(),
        Some(p) if is_ready_url(p) => p.to_string(),
        Some(p) => format!("{}/users/{}", uploads_base.trim_end_matches('/'), p),
    }
}

/// A bare `name.ext` with an image extension, e.g. `default.jpg`.
fn is_bare_image_filename(s: &str) -> bool {
    let Some((stem, ext)) = s.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && stem.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        && IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}

/// Whether `url` can be rendered as-is.
///
/// Bare file names are rejected (they still need the uploads prefix), relative
/// paths are accepted, and `http…`/`localhost` strings must parse as URLs.
pub fn is_valid_image_url(url: &str) -> bool {
    if url.is_empty() || is_bare_image_filename(url) {
        return false;
    }
    if url.starts_with('/') {
        return true;
    }
    if url.contains("localhost") || url.starts_with("http") {
        return Url::parse(url).is_ok();
    }
    false
}

/// Looser check used before rendering: relative paths and any absolute URL
/// (including `data:` previews).
pub fn is_renderable_src(src: &str) -> bool {
    !src.is_empty() && (src.starts_with('/') || Url::parse(src).is_ok())
}

/// MIME type for an image file name, `None` when it is not an image.
pub fn image_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
