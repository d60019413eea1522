//! Refresh session entity stored in the session store.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the random refresh token secret in bytes (hex-encoded on the
/// wire, so the visible token is twice this long)
pub const REFRESH_TOKEN_BYTES: usize = 36;

/// Server-held record representing one outstanding refresh token.
///
/// Sessions are keyed in the store by their own token value, so session
/// identity is tied to possession of the secret. Records are never mutated:
/// rotation deletes the old record and writes a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSession {
    /// Owner principal
    pub subject: String,

    /// Opaque random token; lookup key and bearer secret
    pub refresh_token: String,

    /// Absolute expiry as Unix timestamp
    pub expires_at: i64,

    /// Creation time as Unix timestamp
    pub created_at: i64,
}

impl RefreshSession {
    /// Creates a session expiring `ttl` from now
    pub fn new(subject: impl Into<String>, refresh_token: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            subject: subject.into(),
            refresh_token: refresh_token.into(),
            expires_at: (now + ttl).timestamp(),
            created_at: now.timestamp(),
        }
    }

    /// Whether the session has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.expires_at
    }

    /// Seconds until expiry, zero if already expired
    pub fn remaining_ttl(&self) -> i64 {
        (self.expires_at - Utc::now().timestamp()).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_live() {
        let session = RefreshSession::new("alice", "token-value", Duration::days(7));

        assert_eq!(session.subject, "alice");
        assert_eq!(session.refresh_token, "token-value");
        assert!(!session.is_expired());
        assert!(session.remaining_ttl() > 0);
    }

    #[test]
    fn test_expired_session() {
        let mut session = RefreshSession::new("alice", "token-value", Duration::days(7));
        session.expires_at = Utc::now().timestamp() - 1;

        assert!(session.is_expired());
        assert_eq!(session.remaining_ttl(), 0);
    }

    #[test]
    fn test_session_serialization_round_trip() {
        let session = RefreshSession::new("bob", "other-token", Duration::hours(1));

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: RefreshSession = serde_json::from_str(&json).unwrap();

        assert_eq!(session, deserialized);
    }
}
