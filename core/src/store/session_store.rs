//! Session store trait defining the persistence seam for refresh sessions.

use async_trait::async_trait;

use crate::domain::entities::session::RefreshSession;
use crate::errors::AuthError;

/// Keyed persistence for refresh sessions.
///
/// Implementations map a refresh token value to its serialized session
/// record. No transactional guarantees are assumed across calls; rotation
/// relies on the store giving at least read-your-writes consistency for the
/// get/delete pair, otherwise the single-use guarantee weakens to
/// best-effort (see the lifecycle manager).
///
/// All mutable service state lives behind this trait — the core holds no
/// in-process session cache.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a session by its refresh token value.
    ///
    /// Returns `Ok(None)` on a miss; errors only for store I/O failures.
    async fn get(&self, refresh_token: &str) -> Result<Option<RefreshSession>, AuthError>;

    /// Persist a session keyed by its refresh token value.
    async fn put(&self, session: &RefreshSession) -> Result<(), AuthError>;

    /// Delete a session by its refresh token value.
    ///
    /// Deleting an absent key is not an error; the result reports whether a
    /// record was actually removed.
    async fn delete(&self, refresh_token: &str) -> Result<bool, AuthError>;
}
