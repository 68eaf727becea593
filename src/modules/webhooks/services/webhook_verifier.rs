use crate::core::{AppError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Header carrying the provider's signature
pub const SIGNATURE_HEADER: &str = "x-khipu-signature";

type HmacSha256 = Hmac<Sha256>;

/// Verifies webhook notifications signed with HMAC-SHA256.
///
/// The secret is the merchant API key. Signatures are lowercase hex digests
/// over the exact request body bytes.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: String,
}

impl WebhookVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Lowercase hex HMAC-SHA256 of `body`
    pub fn sign(&self, body: &[u8]) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| AppError::internal("Invalid webhook secret length"))?;
        mac.update(body);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check `signature` against the digest of `body`.
    ///
    /// Exact string match: an uppercase or truncated digest is rejected.
    pub fn verify(&self, body: &[u8], signature: &str) -> Result<()> {
        let expected = self.sign(body)?;

        if bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
            Ok(())
        } else {
            Err(AppError::InvalidSignature {
                expected,
                received: signature.to_string(),
            })
        }
    }
}
