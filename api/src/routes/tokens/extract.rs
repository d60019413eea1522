use actix_web::{web, HttpResponse};

use kg_core::store::SessionStore;

use crate::app::AppState;
use crate::dto::token_dto::{ExtractTokenDataRequest, TokenDataResponse};
use crate::handlers::error_handler::handle_auth_error;

/// Handler for POST /api/v1/tokens/extract
///
/// Returns all claims of a valid access token, flattened to strings.
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
/// { "data": { "user_id": "test_user", "role": "user", "exp": "1753000000" } }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty token
/// - 401 Unauthorized: invalid, expired or mis-signed token
pub async fn extract_token_data<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<ExtractTokenDataRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
{
    match state.token_service.extract_token_data(&request.token).await {
        Ok(data) => HttpResponse::Ok().json(TokenDataResponse { data }),
        Err(error) => handle_auth_error(error),
    }
}
