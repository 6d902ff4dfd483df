//! Secrets must not surface through `Debug` output or error messages.

use authenticator_core::{derive_secret, generate_code_at, Authenticator, EncodedSecret};

const ORIGIN: &str = "origin-sentinel-4f2a";

#[test]
fn encoded_secret_debug_is_masked() {
    let secret = derive_secret(ORIGIN.as_bytes());
    let debug = format!("{secret:?}");
    assert_eq!(debug, "EncodedSecret(***)");
    assert!(!debug.contains(secret.as_str()));
}

#[test]
fn authenticator_debug_is_masked() {
    let auth = Authenticator::new(ORIGIN).with_account("alice");
    let debug = format!("{auth:?}");
    assert!(!debug.contains(ORIGIN), "origin leaked: {debug}");
    assert!(!debug.contains(auth.secret().as_str()), "secret leaked: {debug}");
}

#[test]
fn decode_error_does_not_echo_secret() {
    let candidate = "SENTINELSENTINE1";
    let err = generate_code_at(candidate, 59).expect_err("invalid secret");
    assert!(!err.to_string().contains(candidate));

    let err = candidate.parse::<EncodedSecret>().expect_err("invalid secret");
    assert!(!err.to_string().contains(candidate));
}
