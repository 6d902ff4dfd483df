//! `authenticator-core` — TOTP codes and enrollment URIs for standard
//! authenticator apps.
//!
//! Stateless and synchronous: secret derivation, RFC 6238 code generation
//! (HMAC-SHA1, 30-second step, 6 digits) and `otpauth://` provisioning.
//! No network, no persistence; the system clock is the only ambient input
//! and every clock-reading operation has an `_at` variant taking the time.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod secret;
pub mod time_step;
pub mod totp;

pub mod provisioning;

pub mod authenticator;

pub use authenticator::Authenticator;
pub use error::OtpError;
pub use provisioning::{
    provisioning_uri, qr_code_url, ProvisioningConfig, DEFAULT_QR_SERVICE_URL, OTPAUTH_TOTP_BASE,
};
pub use secret::{decode_secret, derive_secret, EncodedSecret, PADDING_SUBSTITUTE};
pub use time_step::{
    encode_time_step, now_unix_seconds, seconds_remaining, time_counter, TIME_STEP_SECONDS,
};
pub use totp::{
    dynamic_truncate, format_code, generate_code, generate_code_at, generate_code_with_key,
    hmac_sha1, CODE_DIGITS, CODE_MODULUS, DIGEST_LEN,
};
