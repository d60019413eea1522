//! # Keygate Infrastructure
//!
//! Production implementations of the core's external seams. Currently one:
//! the Redis-backed [`store::RedisSessionStore`].

pub mod store;

use thiserror::Error;

pub use store::RedisSessionStore;

/// Infrastructure-level failures, mapped to `AuthError::Internal` at the
/// store trait boundary
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("session store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
