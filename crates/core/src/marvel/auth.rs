//! Request signing and URL composition for the Marvel public API
//!
//! Every request carries `ts`, `apikey` and `hash` query parameters. The hash is
//! the lower-case hex MD5 of `ts || private_key || public_key`; the service
//! recomputes it server-side, so the byte order here must not change.

use std::fmt;

use crate::error::MetadataError;

/// Public/private key pair supplied by the caller on every call
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub public_key: String,
    pub private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Compute the request digest for a timestamp and key pair
pub fn sign(timestamp: i64, public_key: &str, private_key: &str) -> String {
    let payload = format!("{}{}{}", timestamp, private_key, public_key);
    format!("{:x}", md5::compute(payload.as_bytes()))
}

/// Ensure both keys are present before any request is attempted
pub fn check_credentials(credentials: &Credentials) -> Result<(), MetadataError> {
    if credentials.public_key.trim().is_empty() {
        return Err(MetadataError::Configuration("Public key not defined".to_string()));
    }
    if credentials.private_key.trim().is_empty() {
        return Err(MetadataError::Configuration("Private key not defined".to_string()));
    }
    Ok(())
}

/// Compose a signed request URL
///
/// # Arguments
/// * `base_url` - Service root, e.g. `https://gateway.marvel.com`
/// * `path` - Endpoint path below `/v1/public/`
/// * `query` - Pre-encoded query parameters, may be empty
/// * `credentials` - Key pair used for `apikey` and `hash`
/// * `timestamp` - Milliseconds since the epoch; the caller must supply a fresh one per request
pub fn build_url(
    base_url: &str,
    path: &str,
    query: &str,
    credentials: &Credentials,
    timestamp: i64,
) -> String {
    format!(
        "{}/v1/public/{}?{}&ts={}&apikey={}&hash={}",
        base_url.trim_end_matches('/'),
        path,
        query,
        timestamp,
        credentials.public_key,
        sign(timestamp, &credentials.public_key, &credentials.private_key)
    )
}
