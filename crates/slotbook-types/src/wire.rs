//! Wire shapes: the exact JSON envelopes the remote API sends.
//!
//! These are the structures the gateway deserializes before mapping to
//! the domain records in [`crate::types`]. They exist because the API's
//! auth endpoints wrap their payloads (`{ token, user: {...} }`) and use
//! `user_id` where the domain says `id` — the translation happens once,
//! at the gateway, and the rest of the code never sees these.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{Identity, UserId};

/// `POST /auth/login` response: a fresh bearer token plus the base
/// profile of the user it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// The user object embedded in [`LoginResponse`]. No roles here — those
/// are a separate fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

impl From<LoginUser> for Identity {
    fn from(user: LoginUser) -> Self {
        Identity {
            id: user.user_id,
            name: user.name,
            email: user.email,
            roles: Vec::new(),
        }
    }
}

/// `POST /checkauth` response: the token's claims, echoing who the
/// bearer is. Only the id matters — the profile is fetched separately.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckAuthResponse {
    pub user: CheckAuthUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckAuthUser {
    pub user_id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// `GET /users/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserRecord> for Identity {
    fn from(user: UserRecord) -> Self {
        Identity {
            id: user.user_id,
            name: user.name,
            email: user.email,
            roles: Vec::new(),
        }
    }
}

/// `POST /bookings/{id}/cancel` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelResponse {
    pub message: String,
}

/// The body the server attaches to 4xx/5xx responses. Parsed
/// best-effort — a failure response with no parsable body still
/// normalizes, just without the server's own words.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_json_format() {
        let json = r#"{
            "token": "abc.def.ghi",
            "user": { "user_id": 5, "name": "Anna", "email": "anna@example.com" }
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "abc.def.ghi");
        assert_eq!(resp.user.user_id, UserId(5));
    }

    #[test]
    fn test_login_user_maps_user_id_to_identity_id() {
        let user = LoginUser {
            user_id: UserId(5),
            name: "Anna".into(),
            email: "anna@example.com".into(),
        };
        let identity: Identity = user.into();
        assert_eq!(identity.id, UserId(5));
        assert!(identity.roles.is_empty(), "roles start unresolved");
    }

    #[test]
    fn test_checkauth_response_tolerates_extra_claims() {
        // The token claims carry iat/exp too — unknown fields must not
        // break parsing.
        let json = r#"{
            "message": "ok",
            "user": { "user_id": 5, "email": "anna@example.com", "iat": 1, "exp": 2 }
        }"#;
        let resp: CheckAuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.user_id, UserId(5));
    }

    #[test]
    fn test_user_record_maps_to_identity_without_roles() {
        let json = r#"{
            "user_id": 5,
            "name": "Anna",
            "email": "anna@example.com",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        let identity: Identity = record.into();
        assert_eq!(identity.name, "Anna");
        assert!(identity.roles.is_empty());
    }

    #[test]
    fn test_error_body_parses_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Timeslot already full"}"#)
                .unwrap();
        assert_eq!(body.message, "Timeslot already full");
    }
}
