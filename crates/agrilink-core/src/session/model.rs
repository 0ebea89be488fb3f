//! Session domain model.
//!
//! This module contains the session record the auth endpoints hand out.
//! It is the only piece of state the client ever persists.

use serde::{Deserialize, Serialize};

/// The authenticated account as the platform reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// A login session.
///
/// A session is all-or-nothing: either every required field is available
/// or no session exists. Partial records never round-trip through storage
/// because deserialization rejects them. Fields the server adds later are
/// ignored rather than breaking older clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Account identity returned alongside the token.
    pub user: UserAccount,
    /// Bearer token attached to authenticated requests.
    pub access_token: String,
    /// Token scheme; the platform always issues `bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_auth_payload() {
        let payload = json!({
            "access_token": "tok-abc",
            "token_type": "bearer",
            "user": {"id": 7, "email": "asha@example.com", "name": "Asha"}
        });

        let session: Session = serde_json::from_value(payload).unwrap();
        assert_eq!(session.access_token, "tok-abc");
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.user.id, 7);
        assert_eq!(session.user.name, "Asha");
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let payload = json!({
            "access_token": "tok-abc",
            "user": {"id": 1, "email": "a@b.c", "name": "A"}
        });

        let session: Session = serde_json::from_value(payload).unwrap();
        assert_eq!(session.token_type, "bearer");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = json!({
            "access_token": "tok-abc",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {"id": 1, "email": "a@b.c", "name": "A", "created_at": "2025-01-01T00:00:00+00:00"}
        });

        assert!(serde_json::from_value::<Session>(payload).is_ok());
    }

    #[test]
    fn test_partial_payload_is_rejected() {
        // No access_token: the record must not become a session.
        let payload = json!({
            "token_type": "bearer",
            "user": {"id": 1, "email": "a@b.c", "name": "A"}
        });

        assert!(serde_json::from_value::<Session>(payload).is_err());
    }
}
