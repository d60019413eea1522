//! Mapping of service-level errors onto transport status codes.

use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use kg_core::errors::AuthError;

use crate::dto::error_dto::ErrorResponse;

/// Converts an [`AuthError`] into its HTTP response.
///
/// Internal failures are logged in full but reported to the client with a
/// generic message; everything else carries its reason through.
pub fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        AuthError::InvalidArgument { ref message } => {
            warn!("rejected request: {message}");
            ErrorResponse::new("INVALID_ARGUMENT", message.clone())
                .to_response(StatusCode::BAD_REQUEST)
        }
        AuthError::Unauthenticated { ref message } => {
            warn!("unauthenticated: {message}");
            ErrorResponse::new("UNAUTHENTICATED", message.clone())
                .to_response(StatusCode::UNAUTHORIZED)
        }
        AuthError::SessionNotFound => {
            warn!("refresh session not found");
            ErrorResponse::new("NOT_FOUND", "refresh session not found")
                .to_response(StatusCode::NOT_FOUND)
        }
        AuthError::Internal { ref message } => {
            error!("internal error: {message}");
            ErrorResponse::new("INTERNAL", "internal error")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AuthError::InvalidArgument {
                    message: "user_id is empty".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::Unauthenticated {
                    message: "refresh token is expired".to_string(),
                },
                StatusCode::UNAUTHORIZED,
            ),
            (AuthError::SessionNotFound, StatusCode::NOT_FOUND),
            (
                AuthError::Internal {
                    message: "store unavailable".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_auth_error(error).status(), expected);
        }
    }
}
