use actix_web::{web, HttpResponse};
use tracing::debug;

use kg_core::store::SessionStore;

use crate::app::AppState;
use crate::dto::token_dto::{RefreshTokenRequest, TokenResponse};
use crate::handlers::error_handler::handle_auth_error;
use crate::middleware::logging::payload_digest;

/// Handler for POST /api/v1/tokens/refresh
///
/// Exchanges a refresh token for a fresh credential pair. Each refresh
/// token is good for exactly one successful exchange; a replay returns
/// 404 because the session was deleted with the first rotation.
///
/// # Request Body
///
/// ```json
/// { "refresh_token": "hex string" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "hex string"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty refresh_token
/// - 401 Unauthorized: session expired or does not match
/// - 404 Not Found: no session for the token
/// - 500 Internal Server Error: session store failure
pub async fn refresh_token<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
{
    debug!("refresh request digest: {}", payload_digest(&*request));

    match state
        .token_service
        .refresh_tokens(&request.refresh_token)
        .await
    {
        Ok(pair) => {
            let response = TokenResponse {
                access_token: pair.access_token,
                refresh_token: pair.refresh_token,
            };
            debug!("refresh response digest: {}", payload_digest(&response));
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_auth_error(error),
    }
}
