//! Token RPC route handlers.

mod extract;
mod generate;
mod refresh;
mod validate;

pub use extract::extract_token_data;
pub use generate::generate_token;
pub use refresh::refresh_token;
pub use validate::validate_token;
