pub mod controllers;
pub mod services;

pub use controllers::WebhookController;
pub use services::{WebhookVerifier, SIGNATURE_HEADER};
