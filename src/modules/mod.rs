pub mod health;
pub mod payments;
pub mod webhooks;

use actix_web::web;
use payments::{PaymentController, PaymentService};
use webhooks::{WebhookController, WebhookVerifier};

/// Mount every route of the relay
pub fn configure(cfg: &mut web::ServiceConfig, payments: PaymentService, verifier: WebhookVerifier) {
    health::configure(cfg);
    PaymentController::configure(cfg, payments);
    WebhookController::configure(cfg, verifier);
}
