//! Token lifecycle manager.

use std::collections::HashMap;

use rand::RngCore;
use tracing::debug;

use crate::domain::entities::credential::TokenPair;
use crate::domain::entities::session::{RefreshSession, REFRESH_TOKEN_BYTES};
use crate::errors::{AuthError, AuthResult};
use crate::store::SessionStore;

use super::codec::CredentialCodec;
use super::config::TokenServiceConfig;
use super::keys::SigningKeys;

/// Orchestrates issuance, validation, rotation and claim extraction.
///
/// Holds no mutable state of its own: the key material is immutable for the
/// process lifetime and every session lives in the injected store, so the
/// service is safe to share across concurrent requests. Failures are
/// reported upward immediately; retry policy belongs to the boundary.
pub struct TokenService<S: SessionStore> {
    store: S,
    codec: CredentialCodec,
    config: TokenServiceConfig,
}

impl<S: SessionStore> TokenService<S> {
    pub fn new(store: S, keys: &SigningKeys, config: TokenServiceConfig) -> Self {
        Self {
            store,
            codec: CredentialCodec::new(keys),
            config,
        }
    }

    /// Issues an access/refresh credential pair for `subject`.
    ///
    /// The caller claims are signed into the access token (reserved keys
    /// win on collision); a fresh refresh session is persisted keyed by its
    /// token value. Issuance is all-or-nothing: if the session cannot be
    /// persisted the signed access token is discarded and the whole call
    /// fails with `Internal`.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - `subject` is empty
    /// * `Internal` - signing or store failure
    pub async fn generate_tokens(
        &self,
        subject: &str,
        claims: &HashMap<String, String>,
    ) -> AuthResult<TokenPair> {
        if subject.is_empty() {
            return Err(AuthError::InvalidArgument {
                message: "user_id is empty".to_string(),
            });
        }

        debug!("issuing credential pair");

        let access_token = self
            .codec
            .issue(subject, claims, self.config.access_token_ttl())
            .map_err(AuthError::from)?;

        let refresh_token = generate_refresh_token();
        let session = RefreshSession::new(
            subject,
            refresh_token.clone(),
            self.config.refresh_token_ttl(),
        );
        self.store.put(&session).await?;

        debug!("credential pair issued");
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Checks whether an access token is currently valid.
    ///
    /// Collapses every rejection (malformed token, wrong algorithm, bad
    /// signature, missing or passed `exp`) to `false` so the caller cannot
    /// distinguish why a token failed; the reason is logged at debug level
    /// for operators.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - `token` is empty
    pub async fn validate_token(&self, token: &str) -> AuthResult<bool> {
        if token.is_empty() {
            return Err(AuthError::InvalidArgument {
                message: "token is required".to_string(),
            });
        }

        match self.codec.verify(token) {
            Ok(_) => Ok(true),
            Err(reason) => {
                debug!("token rejected: {reason}");
                Ok(false)
            }
        }
    }

    /// Exchanges a refresh token for a fresh credential pair.
    ///
    /// Single-use rotation: the presented session is deleted before the new
    /// pair is issued, so a replay of the same token fails with
    /// `SessionNotFound`. If the delete fails the rotation aborts and no new
    /// pair is issued (fail-closed: a forced retry beats two live refresh
    /// tokens for one rotation event). An expired-but-present session fails
    /// `Unauthenticated` and is left for the store's expiry sweep.
    ///
    /// Only the subject carries over; custom claims are not re-derived.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - `refresh_token` is empty
    /// * `SessionNotFound` - no session exists for the token
    /// * `Unauthenticated` - session expired, or stored token mismatch
    /// * `Internal` - store or signing failure
    pub async fn refresh_tokens(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        if refresh_token.is_empty() {
            return Err(AuthError::InvalidArgument {
                message: "refresh_token is empty".to_string(),
            });
        }

        debug!("rotating refresh token");

        let session = self
            .store
            .get(refresh_token)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if session.is_expired() {
            return Err(AuthError::Unauthenticated {
                message: "refresh token is expired".to_string(),
            });
        }

        // Guards against a store that indexes records by something other
        // than the token value
        if session.refresh_token != refresh_token {
            return Err(AuthError::Unauthenticated {
                message: "invalid refresh session".to_string(),
            });
        }

        self.store.delete(refresh_token).await?;

        let pair = self.generate_tokens(&session.subject, &HashMap::new()).await?;

        debug!("refresh token rotated");
        Ok(pair)
    }

    /// Extracts all claims of a valid access token as strings.
    ///
    /// String claims are returned verbatim; numeric and boolean claims
    /// (including `exp`) in their display form.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - `token` is empty
    /// * `Unauthenticated` - signature, algorithm or expiry check failed
    pub async fn extract_token_data(&self, token: &str) -> AuthResult<HashMap<String, String>> {
        if token.is_empty() {
            return Err(AuthError::InvalidArgument {
                message: "token is required".to_string(),
            });
        }

        let claims = self.codec.verify(token).map_err(AuthError::from)?;
        Ok(claims.to_string_map())
    }
}

/// Draws a fresh refresh token from the thread-local CSPRNG.
pub(crate) fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
