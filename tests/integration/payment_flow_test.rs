#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;
use serde_json::{json, Value};

/// Payment is forwarded with the API key and the provider body relayed back
#[actix_web::test]
async fn test_create_payment_relays_provider_response() {
    let fake = FakeKhipu::responding(
        200,
        r#"{"payment_id":"gqzdy6chjne9","payment_url":"https://khipu.com/payment/info/gqzdy6chjne9"}"#,
    );
    let provider = fake.start();
    let srv = spawn_relay(khipu_config(&base_url(&provider), None));

    let mut response = srv
        .post("/create-payment")
        .send_json(&json!({"amount": 2000, "subject": "Test"}))
        .await
        .expect("Failed to create payment");

    assert_ok(&response);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Pago creado en Khipu");
    assert_eq!(body["provider_response"]["payment_id"], "gqzdy6chjne9");
    assert_eq!(body["request_payload"]["amount"], 2000);
    assert_eq!(body["request_payload"]["currency"], "CLP");

    let received = fake.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].api_key.as_deref(), Some(TEST_API_KEY));
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(received[0].body, body["request_payload"]);
    assert!(received[0].body.get("return_url").is_none());
    assert!(received[0].body.get("notify_url").is_none());
    assert!(received[0].body.get("notify_api_version").is_none());
    assert!(received[0]
        .body["transaction_id"]
        .as_str()
        .unwrap()
        .starts_with("csmdemo-"));
}

/// Callback URLs are forwarded when the public URL is https
#[actix_web::test]
async fn test_create_payment_with_public_url_sends_callbacks() {
    let fake = FakeKhipu::responding(200, r#"{"payment_id":"p1"}"#);
    let provider = fake.start();
    let srv = spawn_relay(khipu_config(&base_url(&provider), Some("https://relay.example.com")));

    let response = srv
        .post("/create-payment")
        .send_json(&json!({"payer_email": "ana@example.com", "payer_name": ""}))
        .await
        .expect("Failed to create payment");

    assert_ok(&response);

    let forwarded = &fake.received()[0].body;
    assert_eq!(forwarded["return_url"], "https://relay.example.com/success");
    assert_eq!(forwarded["notify_url"], "https://relay.example.com/webhook");
    assert_eq!(forwarded["notify_api_version"], "3.0");
    assert_eq!(forwarded["payer_email"], "ana@example.com");
    assert!(forwarded.get("payer_name").is_none());
    assert_eq!(forwarded["amount"], 1500);
}

/// Provider rejection keeps its status and body
#[actix_web::test]
async fn test_provider_error_is_passed_through() {
    let fake = FakeKhipu::responding(400, r#"{"error":"bad_request"}"#);
    let provider = fake.start();
    let srv = spawn_relay(khipu_config(&base_url(&provider), None));

    let mut response = srv
        .post("/create-payment")
        .send_json(&json!({"amount": 2000}))
        .await
        .expect("Failed to call relay");

    assert_status(&response, StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"error": "No se pudo crear el pago", "detail": {"error": "bad_request"}})
    );
}

/// An empty error body falls back to a message, status still passed through
#[actix_web::test]
async fn test_provider_error_without_body() {
    let fake = FakeKhipu::responding(503, "");
    let provider = fake.start();
    let srv = spawn_relay(khipu_config(&base_url(&provider), None));

    let mut response = srv
        .post("/create-payment")
        .send_json(&json!({}))
        .await
        .expect("Failed to call relay");

    assert_status(&response, StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Request failed with status code 503");
}

/// Unreachable provider surfaces as 500 with the transport error
#[actix_web::test]
async fn test_unreachable_provider_is_500() {
    let srv = spawn_relay(khipu_config("http://127.0.0.1:1", None));

    let mut response = srv
        .post("/create-payment")
        .send_json(&json!({}))
        .await
        .expect("Failed to call relay");

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No se pudo crear el pago");
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn test_health_and_success_pages() {
    let srv = spawn_relay(khipu_config("http://127.0.0.1:1", None));

    let mut health = srv.get("/health").send().await.unwrap();
    assert_ok(&health);
    assert_eq!(health.body().await.unwrap(), "ok");

    let mut success = srv.get("/success").send().await.unwrap();
    assert_ok(&success);
    let html = success.body().await.unwrap();
    assert!(std::str::from_utf8(&html).unwrap().contains("Gracias"));
}

#[actix_web::test]
async fn test_request_id_header_is_returned() {
    let srv = spawn_relay(khipu_config("http://127.0.0.1:1", None));

    let response = srv
        .get("/health")
        .insert_header(("X-Request-ID", "req-42"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-42");
}
