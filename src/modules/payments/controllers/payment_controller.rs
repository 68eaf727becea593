use super::super::models::{CreatePaymentInput, PaymentRequest};
use super::super::services::PaymentService;
use crate::core::{CapturedBody, Result};
use actix_web::{get, post, web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CREATED_MESSAGE: &str = "Pago creado en Khipu";
pub const FAILED_MESSAGE: &str = "No se pudo crear el pago";

// Landing page only. Payment status is confirmed by the webhook, never here.
const SUCCESS_PAGE: &str = "<h1>Gracias</h1><p>Tu pago fue procesado. \
Ojo: la confirmación real se valida por webhook.</p>";

/// Payment controller
///
/// Provides endpoints for:
/// - Creating a payment with the provider
/// - The page the payer returns to afterwards
pub struct PaymentController {
    service: PaymentService,
}

impl PaymentController {
    pub fn new(service: PaymentService) -> Self {
        Self { service }
    }

    /// Configure payment routes
    pub fn configure(cfg: &mut web::ServiceConfig, service: PaymentService) {
        cfg.app_data(web::Data::new(Self::new(service)))
            .service(create_payment)
            .service(success);
    }
}

/// Successful creation response
#[derive(Debug, Serialize)]
pub struct CreatePaymentResponse {
    pub message: String,
    pub request_payload: PaymentRequest,
    pub provider_response: Value,
}

/// Failed creation response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePaymentFailure {
    pub error: String,
    pub detail: Value,
}

/// Create a payment with the provider
///
/// POST /create-payment
///
/// # Request Body
/// * `{amount?, subject?, payer_email?, payer_name?}` (JSON, all optional)
///
/// # Returns
/// * `200 OK` - `{message, request_payload, provider_response}`
/// * provider status (or 500 on transport failure) - `{error, detail}`
#[post("/create-payment")]
async fn create_payment(
    body: CapturedBody,
    controller: web::Data<PaymentController>,
) -> Result<HttpResponse> {
    let input = CreatePaymentInput::from_body(body.into_json())?;

    let response = match controller.service.create_payment(&input).await {
        Ok(created) => HttpResponse::Ok().json(CreatePaymentResponse {
            message: CREATED_MESSAGE.to_string(),
            request_payload: created.request,
            provider_response: created.provider_response,
        }),
        Err(err) => HttpResponse::build(err.status_code()).json(CreatePaymentFailure {
            error: FAILED_MESSAGE.to_string(),
            detail: err.detail(),
        }),
    };

    Ok(response)
}

/// GET /success - where the provider sends the payer back
#[get("/success")]
async fn success() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SUCCESS_PAGE)
}
