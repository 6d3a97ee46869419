//! Claims embedded in issued access tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::UserRole;

/// Claims carried by every HomeQuest access token.
///
/// The role claim reflects the role at issue time; the request guard
/// re-checks the stored role on every guarded request, so a stale claim
/// cannot widen access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a UUID string
    pub sub: String,

    /// Display name at issue time
    pub name: String,

    /// Role at issue time
    pub role: UserRole,

    /// Issued-at, unix seconds
    pub iat: i64,

    /// Expiry, unix seconds
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Builds claims for a user with the given lifetime and issuer
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        role: UserRole,
        ttl_seconds: i64,
        issuer: impl Into<String>,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            name: name.into(),
            role,
            iat: now,
            exp: now + ttl_seconds,
            iss: issuer.into(),
        }
    }

    /// Parses the subject back into a UUID
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Whether the expiry lies in the past
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}
