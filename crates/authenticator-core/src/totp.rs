//! RFC 6238 TOTP code generation.
//!
//! HMAC-SHA1 over the time-step counter via `ring::hmac`, followed by the
//! RFC 4226 §5.3 dynamic truncation into a 6-digit decimal code.

use ring::hmac;

use crate::secret::decode_secret;
use crate::time_step::{encode_time_step, now_unix_seconds, time_counter};
use crate::OtpError;

// ── Constants ───────────────────────────────────────────────────────

/// HMAC-SHA1 digest length in bytes.
pub const DIGEST_LEN: usize = 20;

/// Number of digits in a generated code.
pub const CODE_DIGITS: usize = 6;

/// 10^`CODE_DIGITS`, the truncation modulus.
pub const CODE_MODULUS: u32 = 1_000_000;

/// Last digest byte; its low nibble selects the truncation offset.
const OFFSET_BYTE: usize = 19;

// ── HMAC ────────────────────────────────────────────────────────────

/// Compute HMAC-SHA1(key, message).
///
/// Any key length is accepted, including empty. Keys up to the 64-byte
/// SHA1 block size are zero-padded by HMAC itself, so trailing zero bytes
/// in such a key do not change the digest.
#[must_use]
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; DIGEST_LEN] {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    let tag = hmac::sign(&key, message);
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(tag.as_ref());
    digest
}

// ── Dynamic truncation (RFC 4226 §5.3) ─────────────────────────────

/// Reduce an HMAC-SHA1 digest to an integer below [`CODE_MODULUS`].
///
/// offset = low nibble of the last byte; the four bytes at `offset` are read
/// big-endian, the top bit is cleared, and the result is taken mod 10^6.
// CODE_MODULUS is a non-zero constant.
#[allow(clippy::arithmetic_side_effects)]
#[must_use]
pub fn dynamic_truncate(digest: &[u8; DIGEST_LEN]) -> u32 {
    // offset <= 15, so offset + 3 <= 18 stays inside the digest.
    let offset = usize::from(digest[OFFSET_BYTE] & 0x0F);

    let p = u32::from_be_bytes([
        digest[offset],
        digest[offset.wrapping_add(1)],
        digest[offset.wrapping_add(2)],
        digest[offset.wrapping_add(3)],
    ]);
    (p & 0x7FFF_FFFF) % CODE_MODULUS
}

/// Format a truncated value as a zero-padded 6-digit string.
#[must_use]
pub fn format_code(code: u32) -> String {
    format!("{code:0>width$}", width = CODE_DIGITS)
}

fn code_for_counter(key: &[u8], counter_bytes: &[u8; 8]) -> String {
    let digest = hmac_sha1(key, counter_bytes);
    format_code(dynamic_truncate(&digest))
}

// ── TOTP (RFC 6238) ────────────────────────────────────────────────

/// Generate the code for raw key bytes at a Unix timestamp.
#[must_use = "OTP code should be used or displayed"]
pub fn generate_code_with_key(key: &[u8], unix_seconds: u64) -> String {
    tracing::trace!(counter = time_counter(unix_seconds), "computing TOTP code");
    code_for_counter(key, &encode_time_step(unix_seconds))
}

/// Generate the code for a base32 secret at a caller-supplied Unix time.
///
/// # Errors
/// Returns `OtpError::InvalidSecretEncoding` if `secret` is not valid
/// base32. Nothing else can fail.
#[must_use = "OTP code should be used or displayed"]
pub fn generate_code_at(secret: &str, unix_seconds: u64) -> Result<String, OtpError> {
    let key = decode_secret(secret)?;
    Ok(generate_code_with_key(&key, unix_seconds))
}

/// Generate the code for a base32 secret at the current system time.
///
/// # Errors
/// Returns `OtpError::InvalidSecretEncoding` if `secret` is not valid
/// base32.
#[must_use = "OTP code should be used or displayed"]
pub fn generate_code(secret: &str) -> Result<String, OtpError> {
    generate_code_at(secret, now_unix_seconds())
}

// ── Tests ───────────────────────────────────────────────────────────
