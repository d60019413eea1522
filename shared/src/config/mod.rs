//! Configuration modules for the Keygate service.

mod cache;
mod server;
mod token;

pub use cache::CacheConfig;
pub use server::ServerConfig;
pub use token::TokenConfig;

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Redis session store settings
    pub cache: CacheConfig,

    /// Token signing and lifetime settings
    pub token: TokenConfig,
}

impl AppConfig {
    /// Assemble the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            token: TokenConfig::from_env(),
        }
    }
}
