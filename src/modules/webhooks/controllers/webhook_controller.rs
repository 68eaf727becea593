use super::super::services::{WebhookVerifier, SIGNATURE_HEADER};
use crate::core::{AppError, CapturedBody, Result};
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

/// Webhook controller for provider payment notifications
///
/// Only the signature is checked; the event itself is logged and
/// acknowledged. The provider retries on anything other than a quick 200.
pub struct WebhookController {
    verifier: WebhookVerifier,
}

impl WebhookController {
    pub fn new(verifier: WebhookVerifier) -> Self {
        Self { verifier }
    }

    /// Configure webhook routes
    pub fn configure(cfg: &mut web::ServiceConfig, verifier: WebhookVerifier) {
        cfg.app_data(web::Data::new(Self::new(verifier)))
            .service(receive_webhook);
    }

    fn verify_event(&self, req: &HttpRequest, body: &CapturedBody) -> Result<Value> {
        // A missing header verifies as the empty string.
        let signature = req
            .headers()
            .get(SIGNATURE_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default();

        if body.raw().is_none() {
            warn!("Raw webhook body unavailable; verifying against re-serialized JSON");
        }

        let signed = body.signing_bytes()?;
        self.verifier.verify(&signed, signature)?;

        Ok(body
            .json()
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())))
    }
}

/// Receive a provider notification
///
/// POST /webhook
///
/// # Headers
/// * `x-khipu-signature` - hex HMAC-SHA256 of the raw body
///
/// # Returns
/// * `200 OK` - `ok`
/// * `403 Forbidden` - `invalid signature`
/// * `500 Internal Server Error` - `server error`
#[post("/webhook")]
async fn receive_webhook(
    req: HttpRequest,
    body: CapturedBody,
    controller: web::Data<WebhookController>,
) -> HttpResponse {
    match controller.verify_event(&req, &body) {
        Ok(event) => {
            info!(event = %event, "Webhook verified");
            text(HttpResponse::Ok(), "ok")
        }
        Err(AppError::InvalidSignature { expected, received }) => {
            warn!(
                expected = %expected,
                received = %received,
                "Webhook signature mismatch"
            );
            text(HttpResponse::Forbidden(), "invalid signature")
        }
        Err(err) => {
            error!(error = %err, "Webhook processing failed");
            text(HttpResponse::InternalServerError(), "server error")
        }
    }
}

fn text(mut builder: actix_web::HttpResponseBuilder, body: &'static str) -> HttpResponse {
    builder.content_type("text/plain; charset=utf-8").body(body)
}
