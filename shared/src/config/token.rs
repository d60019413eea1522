//! Token signing and lifetime configuration

use serde::{Deserialize, Serialize};

/// Key material locations and credential lifetimes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Path to the PEM-encoded RSA private key (signing)
    pub private_key_path: String,

    /// Path to the PEM-encoded RSA public key (verification)
    pub public_key_path: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            private_key_path: String::from("keys/jwt_private_key.pem"),
            public_key_path: String::from("keys/jwt_public_key.pem"),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl TokenConfig {
    /// Read token settings from `JWT_PRIVATE_KEY_PATH` /
    /// `JWT_PUBLIC_KEY_PATH` / `ACCESS_TOKEN_EXPIRY_MINUTES` /
    /// `REFRESH_TOKEN_EXPIRY_DAYS`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let private_key_path =
            std::env::var("JWT_PRIVATE_KEY_PATH").unwrap_or(defaults.private_key_path);
        let public_key_path =
            std::env::var("JWT_PUBLIC_KEY_PATH").unwrap_or(defaults.public_key_path);
        let access_token_expiry_minutes = std::env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry_minutes);
        let refresh_token_expiry_days = std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expiry_days);

        Self {
            private_key_path,
            public_key_path,
            access_token_expiry_minutes,
            refresh_token_expiry_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.access_token_expiry_minutes, 15);
        assert_eq!(config.refresh_token_expiry_days, 7);
        assert!(config.private_key_path.ends_with("jwt_private_key.pem"));
    }
}
