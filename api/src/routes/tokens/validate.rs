use actix_web::{web, HttpResponse};

use kg_core::store::SessionStore;

use crate::app::AppState;
use crate::dto::token_dto::{TokenValidationResponse, ValidateTokenRequest};
use crate::handlers::error_handler::handle_auth_error;

/// Handler for POST /api/v1/tokens/validate
///
/// Checks whether an access token is currently valid. Invalid tokens of any
/// kind produce `is_valid: false`, never an error status — the only error
/// is an empty token string.
///
/// # Request Body
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "is_valid": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty token
pub async fn validate_token<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<ValidateTokenRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
{
    match state.token_service.validate_token(&request.token).await {
        Ok(is_valid) => HttpResponse::Ok().json(TokenValidationResponse { is_valid }),
        Err(error) => handle_auth_error(error),
    }
}
