//! One enrollment: origin secret plus optional issuer label and account.

use std::fmt;

use zeroize::Zeroizing;

use crate::provisioning::{self, ProvisioningConfig};
use crate::secret::{derive_secret, EncodedSecret};
use crate::time_step::now_unix_seconds;
use crate::totp::generate_code_with_key;
use crate::OtpError;

/// Bytes per base32 block of eight symbols.
const BASE32_BLOCK_BYTES: usize = 5;

/// Bundles the origin secret with the enrollment metadata shown in the
/// authenticator app.
///
/// The secret is derived once on construction. The HMAC key is what the
/// derived secret decodes to: the origin followed by zero bytes up to a
/// whole base32 block. Both are wiped on drop and never printed by `Debug`.
pub struct Authenticator {
    secret: EncodedSecret,
    key: Zeroizing<Vec<u8>>,
    label: Option<String>,
    account: Option<String>,
    config: ProvisioningConfig,
}

impl Authenticator {
    /// Create an enrollment from origin bytes (typically UTF-8 text).
    #[must_use]
    pub fn new(origin: impl AsRef<[u8]>) -> Self {
        let origin = origin.as_ref();
        let key_len = origin.len().next_multiple_of(BASE32_BLOCK_BYTES);
        let mut key = Zeroizing::new(Vec::with_capacity(key_len));
        key.extend_from_slice(origin);
        key.resize(key_len, 0);
        Self {
            secret: derive_secret(origin),
            key,
            label: None,
            account: None,
            config: ProvisioningConfig::default(),
        }
    }

    /// Set the issuer label (service name).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the account name shown under the issuer.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Replace the provisioning settings.
    #[must_use]
    pub fn with_config(mut self, config: ProvisioningConfig) -> Self {
        self.config = config;
        self
    }

    /// Issuer label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Account name, if any.
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// The shared secret to store and show to the user.
    #[must_use]
    pub const fn secret(&self) -> &EncodedSecret {
        &self.secret
    }

    /// Code for the current 30-second window.
    #[must_use = "OTP code should be used or displayed"]
    pub fn code(&self) -> String {
        self.code_at(now_unix_seconds())
    }

    /// Code for the window containing `unix_seconds`.
    #[must_use = "OTP code should be used or displayed"]
    pub fn code_at(&self, unix_seconds: u64) -> String {
        generate_code_with_key(&self.key, unix_seconds)
    }

    /// `otpauth://totp/` URI for this enrollment.
    ///
    /// # Errors
    /// Returns `OtpError::ProvisioningUri` if the URI cannot be assembled.
    pub fn provisioning_uri(&self) -> Result<String, OtpError> {
        provisioning::provisioning_uri(&self.secret, self.label(), self.account())
    }

    /// QR rendering service address carrying the provisioning URI.
    ///
    /// # Errors
    /// Returns `OtpError::ProvisioningUri` if the configured service address
    /// is not a valid URL.
    pub fn qr_code_url(&self) -> Result<String, OtpError> {
        provisioning::qr_code_url(&self.provisioning_uri()?, &self.config)
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("secret", &self.secret)
            .field("label", &self.label)
            .field("account", &self.account)
            .field("config", &self.config)
            .finish()
    }
}
