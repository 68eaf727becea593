#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;
use khipu_relay::webhooks::SIGNATURE_HEADER;

const EVENT: &str = r#"{"status":"done"}"#;

fn relay() -> TestServer {
    spawn_relay(khipu_config("http://127.0.0.1:1", None))
}

/// Correctly signed notification is acknowledged
#[actix_web::test]
async fn test_signed_webhook_is_accepted() {
    let srv = relay();

    let mut response = srv
        .post("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((SIGNATURE_HEADER, sign(EVENT.as_bytes())))
        .send_body(EVENT)
        .await
        .expect("Failed to deliver webhook");

    assert_ok(&response);
    assert_eq!(response.body().await.unwrap(), "ok");
}

/// One altered character in the signature is rejected
#[actix_web::test]
async fn test_altered_signature_is_rejected() {
    let srv = relay();

    let mut signature = sign(EVENT.as_bytes());
    let last = signature.pop().unwrap();
    signature.push(if last == '0' { '1' } else { '0' });

    let mut response = srv
        .post("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((SIGNATURE_HEADER, signature))
        .send_body(EVENT)
        .await
        .expect("Failed to deliver webhook");

    assert_status(&response, StatusCode::FORBIDDEN);
    assert_eq!(response.body().await.unwrap(), "invalid signature");
}

/// The signature covers the bytes as sent, whitespace included
#[actix_web::test]
async fn test_signature_is_over_raw_bytes() {
    let srv = relay();
    let pretty = "{\n  \"status\": \"done\",\n  \"amount\": 2000\n}";

    let accepted = srv
        .post("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((SIGNATURE_HEADER, sign(pretty.as_bytes())))
        .send_body(pretty)
        .await
        .unwrap();
    assert_ok(&accepted);

    // Signing the compact form does not verify the pretty body.
    let rejected = srv
        .post("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((SIGNATURE_HEADER, sign(br#"{"status":"done","amount":2000}"#)))
        .send_body(pretty)
        .await
        .unwrap();
    assert_status(&rejected, StatusCode::FORBIDDEN);
}

/// Missing signature header is rejected
#[actix_web::test]
async fn test_missing_signature_is_rejected() {
    let srv = relay();

    let response = srv
        .post("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .send_body(EVENT)
        .await
        .unwrap();

    assert_status(&response, StatusCode::FORBIDDEN);
}

/// Malformed JSON never reaches the signature check
#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let srv = relay();
    let body = r#"{"status":"#;

    let response = srv
        .post("/webhook")
        .insert_header(("Content-Type", "application/json"))
        .insert_header((SIGNATURE_HEADER, sign(body.as_bytes())))
        .send_body(body)
        .await
        .unwrap();

    assert_status(&response, StatusCode::BAD_REQUEST);
}
