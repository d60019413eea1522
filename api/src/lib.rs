//! # Keygate API
//!
//! Service boundary for the token lifecycle: HTTP RPC handlers, DTOs,
//! error-to-status mapping and the request logging middleware. The binary
//! entry point (`main.rs`) wires configuration, signing keys and the Redis
//! session store into the core service.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
