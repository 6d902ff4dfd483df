//! Error types for `authenticator-core`.

use thiserror::Error;

/// Errors produced by secret handling and code generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    /// The shared secret is not decodable base32 (alphabet `A-Z2-7`).
    #[error("invalid secret encoding: {0}")]
    InvalidSecretEncoding(String),

    /// The provisioning URI or QR service address could not be assembled.
    #[error("provisioning URI error: {0}")]
    ProvisioningUri(String),
}
