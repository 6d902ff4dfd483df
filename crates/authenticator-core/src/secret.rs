//! Shared-secret derivation and base32 handling.
//!
//! The shared secret is the origin bytes under RFC 4648 base32 with every
//! `=` padding character replaced by [`PADDING_SUBSTITUTE`]. `A` is the
//! zero-valued base32 symbol, so a substituted secret still decodes with a
//! standard padded decoder: the padding positions come back as zero bits and
//! the key gains at most four trailing zero bytes.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use data_encoding::{Encoding, SpecificationError, BASE32};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::OtpError;

// ── Constants ───────────────────────────────────────────────────────

/// Base32 padding character produced by the RFC 4648 encoder.
const BASE32_PADDING: char = '=';

/// Character written in place of every base32 padding character.
pub const PADDING_SUBSTITUTE: char = 'A';

/// RFC 4648 base32 decoder that ignores the unused low bits of the last
/// symbol, as common authenticator apps do.
static DECODER: OnceLock<Result<Encoding, SpecificationError>> = OnceLock::new();

// ── Types ───────────────────────────────────────────────────────────

/// A base32 shared secret ready to store, display, or embed in a
/// provisioning URI.
///
/// The text only ever holds `A-Z2-7`: [`derive_secret`] and
/// [`EncodedSecret::parse`] both write [`PADDING_SUBSTITUTE`] in place of
/// `=` padding.
///
/// `Debug` output is masked (`EncodedSecret(***)`); call
/// [`EncodedSecret::as_str`] to expose the value on purpose.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedSecret(String);

impl EncodedSecret {
    /// Validate a stored secret string.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidSecretEncoding` if `secret` does not decode
    /// as base32 (characters outside `A-Z2-7`, lowercase letters, or a
    /// length that is not a whole number of 8-character blocks).
    ///
    /// The stored text is re-encoded from the decoded key: standard `=`
    /// padding comes back as [`PADDING_SUBSTITUTE`] and stray trailing bits
    /// are cleared, so the result always decodes to the same key as `secret`.
    pub fn parse(secret: &str) -> Result<Self, OtpError> {
        let key = decode_secret(secret)?;
        let encoded = Zeroizing::new(BASE32.encode(&key));
        Ok(Self(substitute_padding(&encoded)))
    }

    /// The encoded secret text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of encoded characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the secret derived from empty origin bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode to raw HMAC key bytes. The buffer is wiped when dropped.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidSecretEncoding` if the secret does not
    /// decode. Secrets built by [`derive_secret`] or [`EncodedSecret::parse`]
    /// always decode.
    pub fn decode(&self) -> Result<Zeroizing<Vec<u8>>, OtpError> {
        decode_secret(&self.0)
    }
}

impl fmt::Debug for EncodedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncodedSecret(***)")
    }
}

impl AsRef<str> for EncodedSecret {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for EncodedSecret {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EncodedSecret {
    type Error = OtpError;

    fn try_from(secret: String) -> Result<Self, Self::Error> {
        let secret = Zeroizing::new(secret);
        Self::parse(&secret)
    }
}

impl From<EncodedSecret> for String {
    fn from(mut secret: EncodedSecret) -> Self {
        std::mem::take(&mut secret.0)
    }
}

// ── Derivation ──────────────────────────────────────────────────────

/// Derive the shared secret from arbitrary origin bytes.
///
/// The origin is base32-encoded (RFC 4648, padded to a multiple of 8
/// characters) and each `=` is replaced by `A`. Empty input yields the
/// empty secret. Deterministic; never fails.
#[must_use]
pub fn derive_secret(origin: &[u8]) -> EncodedSecret {
    let encoded = substitute_padding(&BASE32.encode(origin));
    tracing::debug!(encoded_len = encoded.len(), "derived TOTP shared secret");
    EncodedSecret(encoded)
}

fn substitute_padding(encoded: &str) -> String {
    encoded
        .chars()
        .map(|c| if c == BASE32_PADDING { PADDING_SUBSTITUTE } else { c })
        .collect()
}

fn decoder() -> Result<&'static Encoding, OtpError> {
    DECODER
        .get_or_init(|| {
            let mut spec = BASE32.specification();
            spec.check_trailing_bits = false;
            spec.encoding()
        })
        .as_ref()
        .map_err(|e| OtpError::InvalidSecretEncoding(format!("base32 decoder unavailable: {e}")))
}

/// Decode a base32 secret string into raw key bytes.
///
/// Accepts both `A`-substituted and `=`-padded secrets. The input must be
/// uppercase and a whole number of 8-character blocks. Non-zero bits left
/// over in the last symbol are ignored.
///
/// # Errors
/// Returns `OtpError::InvalidSecretEncoding` with the decoder's message.
pub fn decode_secret(secret: &str) -> Result<Zeroizing<Vec<u8>>, OtpError> {
    decoder()?
        .decode(secret.as_bytes())
        .map(Zeroizing::new)
        .map_err(|e| {
            tracing::debug!("rejected malformed TOTP secret: {e}");
            OtpError::InvalidSecretEncoding(e.to_string())
        })
}

// ── Tests ───────────────────────────────────────────────────────────
