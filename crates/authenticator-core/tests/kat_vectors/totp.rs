//! RFC 6238 TOTP and RFC 4226 HOTP Known Answer Test vectors.

use authenticator_core::secret::derive_secret;
use authenticator_core::totp::{dynamic_truncate, format_code, generate_code_at, hmac_sha1};

// Secret: "12345678901234567890" (ASCII, 20 bytes). Base32 needs no padding.
const RFC_SEED: &[u8] = b"12345678901234567890";
const RFC_SEED_BASE32: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

// ── RFC 4226 Appendix D — HOTP test vectors ────────────────────────

const HOTP_EXPECTED: [(u64, &str); 10] = [
    (0, "755224"),
    (1, "287082"),
    (2, "359152"),
    (3, "969429"),
    (4, "338314"),
    (5, "254676"),
    (6, "287922"),
    (7, "162583"),
    (8, "399871"),
    (9, "520489"),
];

#[test]
fn rfc4226_appendix_d_truncation() {
    for (counter, expected) in &HOTP_EXPECTED {
        let digest = hmac_sha1(RFC_SEED, &counter.to_be_bytes());
        let code = format_code(dynamic_truncate(&digest));
        assert_eq!(&code, expected, "RFC 4226 HOTP mismatch at counter {counter}");
    }
}

// ── RFC 6238 Appendix B — TOTP SHA1 vectors ────────────────────────
// Published codes are 8 digits; a 6-digit code is the same value mod 10^6.

const TOTP_VECTORS: [(u64, &str); 6] = [
    (59, "94287082"),
    (1_111_111_109, "07081804"),
    (1_111_111_111, "14050471"),
    (1_234_567_890, "89005924"),
    (2_000_000_000, "69279037"),
    (20_000_000_000, "65353130"),
];

#[test]
fn rfc_seed_derives_plain_base32() {
    assert_eq!(derive_secret(RFC_SEED).as_str(), RFC_SEED_BASE32);
}

#[test]
fn rfc6238_appendix_b_totp_sha1() {
    let secret = derive_secret(RFC_SEED);
    for (time, published) in &TOTP_VECTORS {
        let code = generate_code_at(secret.as_str(), *time).expect("TOTP generation");
        assert_eq!(
            code,
            &published[2..],
            "RFC 6238 TOTP SHA1 mismatch at time {time}"
        );
    }
}

#[test]
fn rfc6238_time_59_known_vector() {
    let code = generate_code_at(RFC_SEED_BASE32, 59).expect("TOTP generation");
    assert_eq!(code, "287082");
}
