//! Records exchanged with the recipe backend.
//!
//! The backend speaks French field names (`titre`, `etapes`, `auteur`, ...);
//! the Rust side uses English names and maps them with serde renames. Decoding
//! is lenient: `null` reads as the field's default, unparseable dates read as
//! absent, counts may arrive as floats or strings, and records may carry `_id`,
//! `id` or both.

mod comment;
mod envelope;
mod recipe;
mod user;

pub use comment::Comment;
pub use envelope::{AuthSession, Page, RatingSummary};
pub use recipe::{Author, AuthorRef, Difficulty, Ingredient, Recipe, RecipeDraft};
pub use user::{Credentials, PasswordChange, ProfileUpdate, Registration, Role, User};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept RFC 3339 strings; anything else becomes `None`.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc)))
}

/// Accept a string or a number and keep it as text.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Record ids: read from `_id` or `id` (preferring `_id`), written as `_id`.
///
/// Used as `#[serde(flatten, with = "record_id")]` so both keys can be present.
pub(crate) mod record_id {
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Keys {
        #[serde(rename = "_id", default)]
        mongo: Option<Value>,
        #[serde(default)]
        id: Option<Value>,
    }

    fn as_text(value: Option<Value>) -> Option<String> {
        match value? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keys = Keys::deserialize(deserializer)?;
        Ok(as_text(keys.mongo).or_else(|| as_text(keys.id)).unwrap_or_default())
    }

    pub fn serialize<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("_id", id)?;
        map.end()
    }
}

fn as_number(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// A whole count from an integer, float or numeric string. Fractions round,
/// negatives clamp to zero, and values out of range read as absent.
pub(crate) fn lenient_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(as_number)
        .and_then(|n| T::try_from(n.round().max(0.0) as u64).ok()))
}

/// A float from a number or numeric string.
pub(crate) fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(as_number))
}

/// `dd/mm/yyyy`, the format the pages display dates in.
pub fn format_date(date: Option<&DateTime<Utc>>) -> Option<String> {
    date.map(|d| d.format("%d/%m/%Y").to_string())
}

/// Year shown in the footer copyright.
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Tally {
        #[serde(default, deserialize_with = "lenient_count")]
        minutes: Option<u32>,
        #[serde(default, deserialize_with = "lenient_count")]
        stars: Option<u8>,
        #[serde(default, deserialize_with = "lenient_float")]
        average: Option<f64>,
    }

    fn tally(json: &str) -> Tally {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_lenient_counts() {
        let t = tally(r#"{"minutes":350.5,"stars":"4","average":"4.25"}"#);
        assert_eq!(t.minutes, Some(351));
        assert_eq!(t.stars, Some(4));
        assert_eq!(t.average, Some(4.25));

        let t = tally(r#"{"minutes":-3,"stars":300,"average":null}"#);
        assert_eq!(t.minutes, Some(0));
        assert_eq!(t.stars, None);
        assert_eq!(t.average, None);

        let t = tally(r#"{"minutes":"beaucoup"}"#);
        assert_eq!(t.minutes, None);
    }
}
