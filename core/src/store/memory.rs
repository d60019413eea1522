//! In-memory session store for tests and local runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::session::RefreshSession;
use crate::errors::AuthError;
use crate::store::session_store::SessionStore;

/// Hash-map backed [`SessionStore`].
///
/// Records are kept until explicitly deleted; there is no expiry sweep, so
/// expired sessions stay visible exactly like they would in a store without
/// TTL support.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, RefreshSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, refresh_token: &str) -> Result<Option<RefreshSession>, AuthError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(refresh_token).cloned())
    }

    async fn put(&self, session: &RefreshSession) -> Result<(), AuthError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.refresh_token.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, refresh_token: &str) -> Result<bool, AuthError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(refresh_token).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_put_get_delete_round_trip() {
        let store = InMemorySessionStore::new();
        let session = RefreshSession::new("alice", "token-1", Duration::days(1));

        store.put(&session).await.unwrap();
        assert_eq!(store.get("token-1").await.unwrap(), Some(session));

        assert!(store.delete("token-1").await.unwrap());
        assert_eq!(store.get("token-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_not_an_error() {
        let store = InMemorySessionStore::new();
        assert!(!store.delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_put_replaces_existing_record() {
        let store = InMemorySessionStore::new();
        let first = RefreshSession::new("alice", "token-1", Duration::days(1));
        let second = RefreshSession::new("bob", "token-1", Duration::days(2));

        store.put(&first).await.unwrap();
        store.put(&second).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get("token-1").await.unwrap().unwrap().subject,
            "bob"
        );
    }
}
