pub mod webhook_verifier;

pub use webhook_verifier::{WebhookVerifier, SIGNATURE_HEADER};
