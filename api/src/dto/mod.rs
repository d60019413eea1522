//! Request and response data transfer objects.

pub mod error_dto;
pub mod token_dto;

pub use error_dto::ErrorResponse;
pub use token_dto::{
    ExtractTokenDataRequest, GenerateTokenRequest, RefreshTokenRequest, TokenDataResponse,
    TokenResponse, TokenValidationResponse, ValidateTokenRequest,
};
