//! Domain entities representing credentials and refresh sessions.

pub mod credential;
pub mod session;

// Re-export commonly used types
pub use credential::{ClaimSet, TokenPair, CLAIM_EXPIRY, CLAIM_SUBJECT};
pub use session::{RefreshSession, REFRESH_TOKEN_BYTES};
