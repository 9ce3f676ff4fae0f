use crate::core::errors::ExchangeError;
use crate::core::kernel::query::{sorted_query_string, QueryParams};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use std::collections::HashMap;

/// Fixed User-Agent attached to every signed request.
pub const USER_AGENT: &str = concat!("coinex-client/", env!("CARGO_PKG_VERSION"));

/// Compute the signature for a canonical parameter string.
///
/// The base string is `canonical + "&secret_key=" + secret`; the digest is
/// HMAC-SHA256 keyed by the secret over the UTF-8 bytes of that base
/// string, hex-encoded lowercase. Pure and deterministic, which is what
/// makes the signing path testable without network access.
pub fn sign_canonical(canonical: &str, secret: &str) -> Result<String, ExchangeError> {
    let base = format!("{}&secret_key={}", canonical, secret);

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| ExchangeError::AuthenticationRequired(format!("Invalid secret key: {}", e)))?;
    mac.update(base.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign a parameter bag in its insertion order.
///
/// The canonical string here is byte-identical to the URL query string
/// built from the same bag, so signature and URL always agree.
pub fn sign_from_bag(params: &QueryParams, secret: &str) -> Result<String, ExchangeError> {
    sign_canonical(&params.to_query_string(), secret)
}

/// Sign a list of pre-formatted `key=value` strings after sorting them
/// lexicographically. The ordering differs from [`sign_from_bag`] for the
/// same logical parameter set; callers choose the form explicitly.
pub fn sign_from_sorted_list(items: &[String], secret: &str) -> Result<String, ExchangeError> {
    sign_canonical(&sorted_query_string(items), secret)
}

/// Seam for request authentication: turns a canonical parameter string into
/// the headers a signed call must carry.
pub trait Signer: Send + Sync {
    fn sign_request(&self, canonical: &str) -> Result<HashMap<String, String>, ExchangeError>;
}

/// Signer for the exchange's `authorization` header scheme.
pub struct CoinexSigner {
    secret_key: Secret<String>,
}

impl CoinexSigner {
    #[must_use]
    pub fn new(secret_key: String) -> Self {
        Self {
            secret_key: Secret::new(secret_key),
        }
    }
}

impl Signer for CoinexSigner {
    fn sign_request(&self, canonical: &str) -> Result<HashMap<String, String>, ExchangeError> {
        let signature = sign_canonical(canonical, self.secret_key.expose_secret())?;

        let mut headers = HashMap::new();
        headers.insert("authorization".to_string(), signature);
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_is_deterministic() {
        let a = sign_canonical("access_id=K&tonce=1", "S").unwrap();
        let b = sign_canonical("access_id=K&tonce=1", "S").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn near_equal_inputs_diverge() {
        let base = sign_canonical("access_id=K&tonce=1", "S").unwrap();
        assert_ne!(base, sign_canonical("access_id=K&tonce=2", "S").unwrap());
        assert_ne!(base, sign_canonical("access_id=K&tonce=1", "T").unwrap());
    }

    #[test]
    fn bag_and_sorted_list_forms_differ_when_order_differs() {
        let params = QueryParams::new().with("b", "2").with("a", "1");
        let bag_sig = sign_from_bag(&params, "S").unwrap();
        let list_sig =
            sign_from_sorted_list(&["b=2".to_string(), "a=1".to_string()], "S").unwrap();
        // bag form signs "b=2&a=1", list form signs "a=1&b=2"
        assert_ne!(bag_sig, list_sig);
        assert_eq!(list_sig, sign_canonical("a=1&b=2", "S").unwrap());
    }

    #[test]
    fn signer_emits_authorization_and_user_agent() {
        let signer = CoinexSigner::new("S".to_string());
        let headers = signer.sign_request("access_id=K&tonce=1").unwrap();
        assert_eq!(
            headers.get("authorization").map(String::as_str),
            Some(sign_canonical("access_id=K&tonce=1", "S").unwrap().as_str())
        );
        assert_eq!(headers.get("User-Agent").map(String::as_str), Some(USER_AGENT));
    }
}
