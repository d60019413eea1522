//! Error types for the token lifecycle.
//!
//! Two layers: [`TokenError`] covers codec and key handling failures,
//! [`AuthError`] is the service-level taxonomy the boundary maps onto
//! transport status codes.

use thiserror::Error;

/// Codec-level errors raised while signing, parsing or verifying tokens
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token signing failed")]
    SigningFailed,

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    TokenExpired,

    #[error("unexpected signing algorithm: {alg}")]
    UnexpectedAlgorithm { alg: String },

    #[error("missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("failed to load signing keys: {message}")]
    KeyLoadError { message: String },
}

/// Service-level errors returned by the lifecycle manager
///
/// Each variant corresponds to exactly one transport status code:
/// `InvalidArgument` (caller input malformed), `Unauthenticated`
/// (credential present but fails cryptographic or temporal validation),
/// `SessionNotFound` (referenced session does not exist, distinct from
/// expired) and `Internal` (signing or store failure).
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("unauthenticated: {message}")]
    Unauthenticated { message: String },

    #[error("refresh session not found")]
    SessionNotFound,

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::SigningFailed | TokenError::KeyLoadError { .. } => AuthError::Internal {
                message: err.to_string(),
            },
            _ => AuthError::Unauthenticated {
                message: err.to_string(),
            },
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_failure_is_internal() {
        let err: AuthError = TokenError::SigningFailed.into();
        assert!(matches!(err, AuthError::Internal { .. }));
    }

    #[test]
    fn test_verification_failures_are_unauthenticated() {
        for token_err in [
            TokenError::InvalidToken,
            TokenError::TokenExpired,
            TokenError::UnexpectedAlgorithm {
                alg: "HS256".to_string(),
            },
            TokenError::MissingClaim {
                claim: "exp".to_string(),
            },
        ] {
            let err: AuthError = token_err.into();
            assert!(matches!(err, AuthError::Unauthenticated { .. }));
        }
    }
}
