//! Credential codec: signing and verification of RS256 access tokens.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use tracing::error;

use crate::domain::entities::credential::ClaimSet;
use crate::errors::TokenError;

use super::keys::SigningKeys;

/// Stateless encoder/decoder for signed credentials.
///
/// Signing uses the private half of the injected key pair, verification the
/// public half. The algorithm is fixed to RS256 per deployment; tokens whose
/// header advertises anything else are rejected before signature
/// verification is attempted.
pub struct CredentialCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl CredentialCodec {
    pub fn new(keys: &SigningKeys) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_aud = false;
        // Expiry is enforced exactly; skew allowance belongs to the caller
        validation.leeway = 0;

        Self {
            encoding_key: keys.encoding_key().clone(),
            decoding_key: keys.decoding_key().clone(),
            validation,
        }
    }

    /// Signs a credential for `subject` expiring `ttl` from now.
    ///
    /// The claim set is the caller's claims plus the reserved `user_id` and
    /// `exp` keys; reserved keys overwrite colliding caller entries.
    pub fn issue(
        &self,
        subject: &str,
        claims: &HashMap<String, String>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let expires_at = (Utc::now() + ttl).timestamp();
        let claim_set = ClaimSet::for_issue(subject, claims, expires_at);

        let header = Header::new(Algorithm::RS256);
        encode(&header, &claim_set, &self.encoding_key).map_err(|e| {
            error!("failed to sign token: {e}");
            TokenError::SigningFailed
        })
    }

    /// Parses and fully validates a credential, returning its claims.
    ///
    /// Rejected tokens are reported with the failure class so callers can
    /// either collapse everything to a boolean or propagate upward:
    /// [`TokenError::UnexpectedAlgorithm`] for algorithm confusion,
    /// [`TokenError::TokenExpired`] past `exp`,
    /// [`TokenError::MissingClaim`] for an absent or non-numeric `exp`, and
    /// [`TokenError::InvalidToken`] for everything structurally broken.
    pub fn verify(&self, token: &str) -> Result<ClaimSet, TokenError> {
        let header = decode_header(token).map_err(|_| TokenError::InvalidToken)?;
        if header.alg != Algorithm::RS256 {
            return Err(TokenError::UnexpectedAlgorithm {
                alg: format!("{:?}", header.alg),
            });
        }

        let data = decode::<ClaimSet>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                    claim: claim.clone(),
                },
                _ => TokenError::InvalidToken,
            }
        })?;

        Ok(data.claims)
    }
}
