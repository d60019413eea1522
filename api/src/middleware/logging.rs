//! Request logging middleware and payload correlation digests.
//!
//! Request and response bodies carry bearer secrets, so handlers log a
//! SHA-256 digest of the serialized payload instead of the payload itself;
//! the middleware adds one line per request with method, path, status and
//! latency.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

/// SHA-256 digest of a serializable payload, hex-encoded
pub fn payload_digest<T: Serialize>(value: &T) -> String {
    match serde_json::to_vec(value) {
        Ok(bytes) => format!("{:x}", Sha256::digest(&bytes)),
        Err(_) => "unserializable".to_string(),
    }
}

/// Middleware factory logging one line per handled request
pub struct RequestLogging;

impl RequestLogging {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequestLogging {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestLogging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggingService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestLoggingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let method = req.method().to_string();
        let path = req.path().to_string();
        let started = Instant::now();

        Box::pin(async move {
            let response = service.call(req).await?;
            let status = response.status();
            let elapsed = started.elapsed();

            if status.is_server_error() {
                warn!("{method} {path} -> {status} ({elapsed:?})");
            } else {
                info!("{method} {path} -> {status} ({elapsed:?})");
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_digest_is_stable_and_hex() {
        let digest = payload_digest(&serde_json::json!({"token": "secret-value"}));

        assert_eq!(digest.len(), 64);
        assert_eq!(digest, payload_digest(&serde_json::json!({"token": "secret-value"})));
        // The secret itself never appears in the digest
        assert!(!digest.contains("secret-value"));
    }
}
