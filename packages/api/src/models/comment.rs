use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{format_date, lenient_date, null_default, record_id, AuthorRef};

/// A comment left on a recipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    #[serde(rename = "contenu", default, deserialize_with = "null_default")]
    pub content: String,
    #[serde(rename = "utilisateur", default)]
    pub author: Option<AuthorRef>,
    #[serde(rename = "recette", default)]
    pub recipe: Option<String>,
    #[serde(rename = "dateCreation", default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().map(AuthorRef::id)
    }

    pub fn author_name(&self) -> String {
        AuthorRef::display_name(self.author.as_ref(), "Utilisateur inconnu")
    }

    pub fn author_initials(&self) -> String {
        match &self.author {
            Some(AuthorRef::Populated(a)) => a.initials(),
            _ => "?".to_string(),
        }
    }

    pub fn created_label(&self) -> String {
        format_date(self.created_at.as_ref()).unwrap_or_else(|| "Date inconnue".to_string())
    }

    pub fn is_written_by(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.author_id() == Some(user_id)
    }
}
