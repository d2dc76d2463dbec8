//! API request signing

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Authentication fields attached to every request
///
/// `api_sig` is the hex-encoded HMAC-SHA1 of the decimal timestamp, keyed by
/// the private key. A fresh signature is computed per request so the
/// timestamp stays inside the service's replay window even for long-lived
/// clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSignature {
    pub ts: i64,
    pub api_sig: String,
    pub api_key: String,
}

impl ApiSignature {
    /// Sign the current time with the given credential pair
    pub fn create(public_key: &str, private_key: &str) -> Self {
        Self::create_at(public_key, private_key, Utc::now().timestamp())
    }

    /// Sign a specific unix-seconds timestamp
    pub fn create_at(public_key: &str, private_key: &str, ts: i64) -> Self {
        // HMAC accepts keys of any length, so this cannot fail
        let mut mac = HmacSha1::new_from_slice(private_key.as_bytes())
            .expect("HMAC key of any length is valid");
        mac.update(ts.to_string().as_bytes());
        let api_sig = hex::encode(mac.finalize().into_bytes());

        Self {
            ts,
            api_sig,
            api_key: public_key.to_string(),
        }
    }

    /// The three wire fields as string pairs, ready to merge into a
    /// query string or form body
    pub(crate) fn pairs(&self) -> Vec<(String, String)> {
        vec![
            ("ts".to_string(), self.ts.to_string()),
            ("api_sig".to_string(), self.api_sig.clone()),
            ("api_key".to_string(), self.api_key.clone()),
        ]
    }
}
