//! `otpauth://` provisioning URIs for authenticator-app enrollment.
//!
//! Format: `otpauth://totp/LABEL[:ACCOUNT]?secret=SECRET&issuer=LABEL`.
//! The URI can additionally be wrapped into the address of a QR rendering
//! service; nothing here performs network I/O.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::secret::EncodedSecret;
use crate::OtpError;

// ── Constants ───────────────────────────────────────────────────────

/// Scheme and type prefix of every TOTP provisioning URI.
pub const OTPAUTH_TOTP_BASE: &str = "otpauth://totp/";

/// QR rendering service that receives the provisioning URI as `url`.
pub const DEFAULT_QR_SERVICE_URL: &str = "https://api.pwmqr.com/qrcode/create/";

/// Label components keep only RFC 3986 unreserved characters; `:` is the
/// label/account separator and must be escaped inside a component.
const LABEL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

// ── Configuration ───────────────────────────────────────────────────

/// Settings for the glue around the provisioning URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvisioningConfig {
    /// Base address of the QR rendering service.
    pub qr_service_url: String,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            qr_service_url: DEFAULT_QR_SERVICE_URL.to_owned(),
        }
    }
}

// ── Builders ────────────────────────────────────────────────────────

/// Build the `otpauth://totp/` URI for a secret.
///
/// The path is the label followed by `:account` when an account is given;
/// `issuer` is added to the query only when a label is given.
///
/// # Errors
/// Returns `OtpError::ProvisioningUri` if the assembled string does not
/// parse as a URI.
pub fn provisioning_uri(
    secret: &EncodedSecret,
    label: Option<&str>,
    account: Option<&str>,
) -> Result<String, OtpError> {
    let mut path = String::new();
    if let Some(label) = label {
        path.extend(utf8_percent_encode(label, LABEL_COMPONENT));
    }
    if let Some(account) = account {
        path.push(':');
        path.extend(utf8_percent_encode(account, LABEL_COMPONENT));
    }

    let mut uri = Url::parse(&format!("{OTPAUTH_TOTP_BASE}{path}"))
        .map_err(|e| OtpError::ProvisioningUri(format!("invalid otpauth URI: {e}")))?;
    {
        let mut query = uri.query_pairs_mut();
        query.append_pair("secret", secret.as_str());
        if let Some(label) = label {
            query.append_pair("issuer", label);
        }
    }

    tracing::debug!(
        has_label = label.is_some(),
        has_account = account.is_some(),
        "built TOTP provisioning URI"
    );
    Ok(uri.into())
}

/// Wrap a provisioning URI into the QR rendering service address.
///
/// # Errors
/// Returns `OtpError::ProvisioningUri` if `config.qr_service_url` is not a
/// valid absolute URL.
pub fn qr_code_url(uri: &str, config: &ProvisioningConfig) -> Result<String, OtpError> {
    let service = Url::parse_with_params(&config.qr_service_url, &[("url", uri)]).map_err(|e| {
        OtpError::ProvisioningUri(format!(
            "invalid QR service URL {:?}: {e}",
            config.qr_service_url
        ))
    })?;
    Ok(service.into())
}

// ── Tests ───────────────────────────────────────────────────────────
