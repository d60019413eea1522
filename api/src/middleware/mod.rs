//! HTTP middleware.

pub mod logging;

pub use logging::RequestLogging;
