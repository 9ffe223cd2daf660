//! Errors returned by [`crate::ApiClient`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered 401. Stored credentials have already been cleared.
    #[error("Session expirée ou invalide")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("erreur serveur"))]
    Server { status: u16, message: Option<String> },

    /// A 2xx envelope carrying `success: false`.
    #[error("Requête refusée: {0}")]
    Rejected(String),

    #[error("Erreur réseau: {0}")]
    Transport(String),

    #[error("Réponse illisible: {0}")]
    Decode(String),

    /// A 2xx response without the payload the call expects.
    #[error("Réponse vide")]
    MissingData,
}

impl ApiError {
    /// The server's own message when there is one, `default` otherwise.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ApiError::Server { message: Some(m), .. } if !m.is_empty() => m.clone(),
            ApiError::Rejected(m) if !m.is_empty() => m.clone(),
            _ => default.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Email déjà utilisé".to_string()),
        };
        assert_eq!(err.user_message("Erreur lors de l'inscription"), "Email déjà utilisé");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(err.user_message("Erreur lors de la connexion"), "Erreur lors de la connexion");
        assert_eq!(
            ApiError::Transport("timeout".into()).user_message("Une erreur est survenue"),
            "Une erreur est survenue"
        );
        assert_eq!(ApiError::Rejected(String::new()).user_message("x"), "x");
    }
}
