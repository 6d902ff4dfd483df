//! Integration tests for the derive → store → generate lifecycle.

use authenticator_core::{
    derive_secret, generate_code_at, seconds_remaining, Authenticator, EncodedSecret, OtpError,
    TIME_STEP_SECONDS,
};

/// A derived secret stored as text and parsed back generates the same codes.
#[test]
fn stored_secret_generates_same_codes() {
    let secret = derive_secret("correct horse battery staple".as_bytes());
    let stored = secret.as_str().to_owned();

    let reloaded: EncodedSecret = stored.parse().expect("stored secret parses");
    for time in [0u64, 59, 1_700_000_000, 2_000_000_000] {
        assert_eq!(
            generate_code_at(secret.as_str(), time).expect("original"),
            generate_code_at(reloaded.as_str(), time).expect("reloaded"),
            "codes diverge at time {time}"
        );
    }
}

/// Codes hold for the rest of the window reported by `seconds_remaining`.
#[test]
fn code_valid_until_window_closes() {
    let secret = derive_secret(b"window");
    let time = 1_700_000_007u64;
    let code = generate_code_at(secret.as_str(), time).expect("generate");

    let remaining = seconds_remaining(time);
    let last_second = time + remaining - 1;
    assert_eq!(
        generate_code_at(secret.as_str(), last_second).expect("last second"),
        code
    );
    assert_eq!((time + remaining) % TIME_STEP_SECONDS, 0);
}

/// Consecutive windows for the RFC seed produce the RFC 4226 sequence.
#[test]
fn consecutive_windows_follow_counter() {
    let auth = Authenticator::new("12345678901234567890");
    let codes: Vec<String> = (0u64..4)
        .map(|step| auth.code_at(step * TIME_STEP_SECONDS))
        .collect();
    assert_eq!(codes, ["755224", "287082", "359152", "969429"]);
}

/// A secret typed in lowercase is a caller error, not a wrong code.
#[test]
fn lowercase_secret_is_rejected() {
    let secret = derive_secret(b"case matters");
    let lowered = secret.as_str().to_ascii_lowercase();
    let result = generate_code_at(&lowered, 59);
    assert!(
        matches!(result, Err(OtpError::InvalidSecretEncoding(_))),
        "lowercase secret should yield InvalidSecretEncoding, got: {result:?}"
    );
}

/// Codes are computed independently on many threads.
#[test]
fn concurrent_generation_agrees() {
    let secret = derive_secret(b"shared across threads");
    let expected = generate_code_at(secret.as_str(), 1_234_567_890).expect("generate");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| generate_code_at(secret.as_str(), 1_234_567_890)))
            .collect();
        for handle in handles {
            let code = handle.join().expect("thread").expect("generate");
            assert_eq!(code, expected);
        }
    });
}
