//! # User model and the auth payloads
//!
//! [`User`] is the profile the backend returns from `/auth/profil`, login and
//! registration. It is also what gets cached in client storage, so it
//! serialises back to the same JSON shape (`_id`, `prenom`, `nom`, ...).
//!
//! The password never lives on a [`User`]; it only appears in the outgoing
//! [`Credentials`], [`Registration`] and [`PasswordChange`] payloads.

use serde::{Deserialize, Serialize};

use super::{null_default, record_id};

/// Account role. Unknown roles read as [`Role::User`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::User => "user".to_string(),
            Role::Admin => "admin".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    #[serde(rename = "prenom", default, deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(rename = "nom", default, deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// "Prénom Nom", falling back to the email address.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this user may edit content authored by `author_id`.
    pub fn can_edit(&self, author_id: Option<&str>) -> bool {
        self.is_admin() || author_id.is_some_and(|id| !id.is_empty() && id == self.id)
    }
}

/// `POST /auth/connexion` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /auth/inscription` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Registration {
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "nom")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// `PUT /auth/profil` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "nom")]
    pub last_name: String,
    pub email: String,
}

/// `PUT /auth/password` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PasswordChange {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_profile() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","prenom":"Awa","nom":"Mbarga","email":"awa@example.cm","photo":null,"role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name(), "Awa Mbarga");
        assert!(user.is_admin());
        assert!(user.photo.is_none());
    }

    #[test]
    fn test_cached_user_roundtrips_through_storage_shape() {
        let user = User {
            id: "u2".into(),
            first_name: String::new(),
            last_name: String::new(),
            email: "chef@example.cm".into(),
            photo: Some("me.png".into()),
            role: Role::User,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""prenom":"""#));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert_eq!(back.display_name(), "chef@example.cm");
    }

    #[test]
    fn test_decode_profile_with_both_id_keys() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","id":"u1-virtual","prenom":"Awa","nom":"Mbarga","email":"awa@example.cm"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(serde_json::to_string(&user).unwrap().contains(r#""_id":"u1""#));
    }

    #[test]
    fn test_can_edit() {
        let user: User = serde_json::from_str(r#"{"id":"u1","role":"moderator"}"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.can_edit(Some("u1")));
        assert!(!user.can_edit(Some("u9")));
        assert!(!user.can_edit(None));
    }
}
