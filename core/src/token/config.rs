//! Configuration for the token lifecycle manager

use chrono::Duration;

/// Credential lifetimes
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl TokenServiceConfig {
    /// Access token time-to-live
    pub fn access_token_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_minutes)
    }

    /// Refresh token time-to-live
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::days(self.refresh_token_expiry_days)
    }
}
