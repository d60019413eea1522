//! # Keygate Shared
//!
//! Configuration types shared across the Keygate workspace. Everything here
//! is plain data: values come from environment variables at process start
//! and are handed to the other layers at construction time.

pub mod config;

pub use config::{AppConfig, CacheConfig, ServerConfig, TokenConfig};
