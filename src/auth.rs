//! Credentials and per-request HMAC signing.
//!
//! IEX Cloud accepts two forms of authentication: the publishable token as a
//! `token` query parameter, or signed requests carrying an `x-iex-date`
//! timestamp and an `Authorization` header computed with HMAC-SHA256 over a
//! canonical message. The [`Signer`] here produces that header pair; the
//! [`crate::executor::Executor`] decides which form a request uses.

use chrono::Utc;
use hmac::{Hmac, Mac as _};
/// Secret string type that redacts values in debug output for security.
pub use secrecy::SecretString;
use secrecy::ExposeSecret as _;
use sha2::Sha256;

use crate::{Result, Timestamp};

pub(crate) const X_IEX_DATE: &str = "x-iex-date";
pub(crate) const AUTHORIZATION: &str = "Authorization";

const SCHEME: &str = "IEX-HMAC-SHA256";
const SIGNED_HEADERS: &str = "x-iex-date";

/// API credentials: the publishable token (`pk_...`) that identifies the
/// account, and the secret token (`sk_...`) used to sign requests.
#[derive(Clone, Debug)]
pub struct Credentials {
    publishable: String,
    secret: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<P: Into<String>, S: Into<String>>(publishable: P, secret: S) -> Self {
        Self {
            publishable: publishable.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Returns the publishable token.
    #[must_use]
    pub fn publishable(&self) -> &str {
        &self.publishable
    }

    /// Returns the secret token.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}

/// Computes the `x-iex-date` / `Authorization` header pair for one request.
///
/// Bound at construction to the target host and the secret key. Pure
/// computation, deterministic given the same timestamp; the Executor supplies
/// wall-clock time via [`Signer::sign`].
#[derive(Clone, Debug)]
pub struct Signer {
    host: String,
    secret: SecretString,
}

impl Signer {
    #[must_use]
    pub fn new<H: Into<String>>(host: H, secret: SecretString) -> Self {
        Self {
            host: host.into(),
            secret,
        }
    }

    /// Signs `path_and_query` (the exact string sent on the wire, placeholders
    /// already resolved) with the current wall-clock timestamp.
    pub fn sign(
        &self,
        public_key: &str,
        method: &str,
        path_and_query: &str,
    ) -> Result<(String, String)> {
        self.headers(
            public_key,
            method,
            path_and_query,
            Utc::now().timestamp_millis(),
        )
    }

    /// Returns the `(x-iex-date value, Authorization value)` pair for a fixed
    /// timestamp.
    pub fn headers(
        &self,
        public_key: &str,
        method: &str,
        path_and_query: &str,
        timestamp: Timestamp,
    ) -> Result<(String, String)> {
        let message = self.canonical_message(method, path_and_query, timestamp);
        let signature = hmac_hex(&self.secret, &message)?;
        let authorization = format!(
            "{SCHEME} Credential={public_key}&SignedHeaders={SIGNED_HEADERS}&Signature={signature}"
        );

        Ok((timestamp.to_string(), authorization))
    }

    // The exact byte layout is a contract with the remote verifier.
    fn canonical_message(&self, method: &str, path_and_query: &str, timestamp: Timestamp) -> String {
        format!("{method}\n{}\n{timestamp}\n{path_and_query}", self.host)
    }
}

fn hmac_hex(secret: &SecretString, message: &str) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.expose_secret().as_bytes())?;
    mac.update(message.as_bytes());

    let result = mac.finalize().into_bytes();
    Ok(hex::encode(result))
}
