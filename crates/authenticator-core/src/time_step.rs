//! RFC 6238 time-step counter.
//!
//! The HMAC message for a TOTP code is `floor(unix_seconds / 30)` packed as
//! an unsigned 64-bit big-endian integer.

/// TOTP time step in seconds (RFC 6238 §4 default, fixed).
pub const TIME_STEP_SECONDS: u64 = 30;

/// Time-step counter for a Unix timestamp.
// TIME_STEP_SECONDS is a non-zero constant.
#[allow(clippy::arithmetic_side_effects)]
#[must_use]
pub const fn time_counter(unix_seconds: u64) -> u64 {
    unix_seconds / TIME_STEP_SECONDS
}

/// Counter bytes for a Unix timestamp: the 8-byte big-endian HMAC message.
#[must_use]
pub const fn encode_time_step(unix_seconds: u64) -> [u8; 8] {
    time_counter(unix_seconds).to_be_bytes()
}

/// Seconds left before the window containing `unix_seconds` closes (1..=30).
// The remainder is always < TIME_STEP_SECONDS.
#[allow(clippy::arithmetic_side_effects)]
#[must_use]
pub const fn seconds_remaining(unix_seconds: u64) -> u64 {
    TIME_STEP_SECONDS - unix_seconds % TIME_STEP_SECONDS
}

/// Current Unix time in seconds.
///
/// A clock set before the epoch reads as 0.
#[must_use]
pub fn now_unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
