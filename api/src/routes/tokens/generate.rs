use actix_web::{web, HttpResponse};
use tracing::debug;

use kg_core::store::SessionStore;

use crate::app::AppState;
use crate::dto::token_dto::{GenerateTokenRequest, TokenResponse};
use crate::handlers::error_handler::handle_auth_error;
use crate::middleware::logging::payload_digest;

/// Handler for POST /api/v1/tokens/generate
///
/// Issues an access/refresh credential pair for a subject.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "string",
///     "user_data": { "role": "user" }
/// }
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
/// - 400 Bad Request: empty user_id
/// - 500 Internal Server Error: signing or session store failure
pub async fn generate_token<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<GenerateTokenRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
{
    debug!("generate request digest: {}", payload_digest(&*request));

    match state
        .token_service
        .generate_tokens(&request.user_id, &request.user_data)
        .await
    {
        Ok(pair) => {
            let response = TokenResponse {
                access_token: pair.access_token,
                refresh_token: pair.refresh_token,
            };
            debug!("generate response digest: {}", payload_digest(&response));
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_auth_error(error),
    }
}
