//! Application state and route configuration.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use kg_core::store::SessionStore;
use kg_core::token::TokenService;

use crate::routes::tokens;

/// Shared state handed to every handler
pub struct AppState<S: SessionStore> {
    pub token_service: Arc<TokenService<S>>,
}

/// Registers the health endpoint and the token RPC surface.
///
/// Generic over the session store so tests can run the full HTTP surface
/// against the in-memory implementation.
pub fn configure<S: SessionStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1/tokens")
            .route("/generate", web::post().to(tokens::generate_token::<S>))
            .route("/validate", web::post().to(tokens::validate_token::<S>))
            .route("/refresh", web::post().to(tokens::refresh_token::<S>))
            .route("/extract", web::post().to(tokens::extract_token_data::<S>)),
    );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "keygate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
