use khipu_relay::payments::{CreatePaymentInput, PayloadBuilder};
use serde_json::{json, Value};

fn build(public_url: Option<&str>, body: Value) -> Value {
    let input = CreatePaymentInput::from_body(Some(body)).unwrap();
    let request = PayloadBuilder::new(public_url.map(str::to_string)).build_at(&input, 1_700_000_000_000);
    serde_json::to_value(request).unwrap()
}

#[test]
fn test_no_public_url_omits_callbacks() {
    let payload = build(None, json!({"amount": 2000, "subject": "Test"}));

    assert_eq!(payload["amount"], 2000);
    assert_eq!(payload["subject"], "Test");
    assert_eq!(payload["currency"], "CLP");
    assert_eq!(payload["transaction_id"], "csmdemo-1700000000000");
    for key in ["return_url", "notify_url", "notify_api_version"] {
        assert!(payload.get(key).is_none(), "{key} should be omitted");
    }
}

#[test]
fn test_https_public_url_adds_callbacks() {
    let payload = build(Some("https://example.com"), json!({"amount": 2000, "subject": "Test"}));

    assert_eq!(payload["return_url"], "https://example.com/success");
    assert_eq!(payload["notify_url"], "https://example.com/webhook");
    assert_eq!(payload["notify_api_version"], "3.0");
}

#[test]
fn test_insecure_public_url_omits_callbacks() {
    let payload = build(Some("http://example.com"), json!({"amount": 2000, "subject": "Test"}));

    for key in ["return_url", "notify_url", "notify_api_version"] {
        assert!(payload.get(key).is_none(), "{key} should be omitted");
    }
}

#[test]
fn test_amount_is_not_validated() {
    assert_eq!(build(None, json!({"amount": -50}))["amount"], -50);
    assert_eq!(build(None, json!({"amount": 0}))["amount"], 0);
    assert_eq!(build(None, json!({"amount": "2500"}))["amount"], 2500);
    assert_eq!(build(None, json!({"amount": "mil"}))["amount"], Value::Null);
}

#[test]
fn test_payer_fields_only_when_truthy() {
    let payload = build(None, json!({"payer_email": "", "payer_name": 0}));
    assert!(payload.get("payer_email").is_none());
    assert!(payload.get("payer_name").is_none());

    let payload = build(None, json!({"payer_email": "ana@example.com", "payer_name": 7}));
    assert_eq!(payload["payer_email"], "ana@example.com");
    assert_eq!(payload["payer_name"], "7");
}

#[test]
fn test_field_order_matches_provider_payload() {
    let input = CreatePaymentInput::default();
    let request = PayloadBuilder::new(Some("https://example.com".to_string())).build_at(&input, 9);

    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        concat!(
            r#"{"amount":1500,"currency":"CLP","subject":"Cobro demo CSM","transaction_id":"csmdemo-9","#,
            r#""return_url":"https://example.com/success","notify_url":"https://example.com/webhook","#,
            r#""notify_api_version":"3.0","payer_email":"test@example.com","payer_name":"Cliente Demo"}"#
        )
    );
}
