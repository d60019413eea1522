//! RSA key pair loading for credential signing and verification.

use std::fs;
use std::path::Path;

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::TokenError;

/// Process-wide asymmetric key pair.
///
/// Loaded once at startup and injected into the codec at construction time;
/// immutable for the process lifetime and safe to share across concurrent
/// requests.
#[derive(Clone)]
pub struct SigningKeys {
    /// Private key for signing credentials
    encoding_key: EncodingKey,
    /// Public key for verifying credentials
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of logs
        f.debug_struct("SigningKeys").finish_non_exhaustive()
    }
}

impl SigningKeys {
    /// Loads a key pair from PEM files on disk.
    ///
    /// # Arguments
    ///
    /// * `private_key_path` - Path to the PEM-encoded RSA private key
    /// * `public_key_path` - Path to the PEM-encoded RSA public key
    pub fn from_files<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, TokenError> {
        let private_key_pem =
            fs::read(private_key_path.as_ref()).map_err(|e| TokenError::KeyLoadError {
                message: format!("failed to read private key: {e}"),
            })?;

        let public_key_pem =
            fs::read(public_key_path.as_ref()).map_err(|e| TokenError::KeyLoadError {
                message: format!("failed to read public key: {e}"),
            })?;

        Self::from_pem(&private_key_pem, &public_key_pem)
    }

    /// Builds a key pair from PEM byte strings (tests, embedded keys).
    pub fn from_pem(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, TokenError> {
        let encoding_key =
            EncodingKey::from_rsa_pem(private_key_pem).map_err(|e| TokenError::KeyLoadError {
                message: format!("invalid private key format: {e}"),
            })?;

        let decoding_key =
            DecodingKey::from_rsa_pem(public_key_pem).map_err(|e| TokenError::KeyLoadError {
                message: format!("invalid public key format: {e}"),
            })?;

        Ok(Self {
            encoding_key,
            decoding_key,
        })
    }

    /// Returns the encoding key for signing credentials
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying credentials
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
