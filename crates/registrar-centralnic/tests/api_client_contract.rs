//! API client contract tests
//!
//! Verifies endpoint selection, credential injection, and response
//! classification against a scripted transport.

mod common;

use common::MockTransport;
use registrar_centralnic::{CentralNicApi, PRODUCTION_API_BASE, SANDBOX_API_BASE};
use registrar_core::Error;
use std::sync::Arc;

fn api(sandbox: bool, transport: Arc<MockTransport>) -> CentralNicApi {
    CentralNicApi::new("user", "secret", sandbox, transport)
}

#[tokio::test]
async fn production_mode_targets_production_endpoint() {
    let transport = MockTransport::new();
    let client = api(false, transport.clone());

    client.call("StatusDomain", vec![]).await.unwrap();

    assert_eq!(transport.only_request().url, PRODUCTION_API_BASE);
}

#[tokio::test]
async fn sandbox_mode_targets_ote_endpoint() {
    let transport = MockTransport::new();
    let client = api(true, transport.clone());

    client.call("StatusDomain", vec![]).await.unwrap();

    assert_eq!(transport.only_request().url, SANDBOX_API_BASE);
}

#[tokio::test]
async fn injected_parameters_override_caller_values() {
    let transport = MockTransport::new();
    let client = api(false, transport.clone());

    client
        .call(
            "CheckDomain",
            vec![
                ("domain", "example.com".to_string()),
                ("s_login", "evil".to_string()),
                ("s_pw", "evil".to_string()),
                ("command", "Hijack".to_string()),
                ("output_format", "xml".to_string()),
            ],
        )
        .await
        .unwrap();

    let request = transport.only_request();
    assert_eq!(request.param_count("s_login"), 1);
    assert_eq!(request.param_count("s_pw"), 1);
    assert_eq!(request.param_count("command"), 1);
    assert_eq!(request.param_count("output_format"), 1);
    assert_eq!(request.param("s_login"), Some("user"));
    assert_eq!(request.param("s_pw"), Some("secret"));
    assert_eq!(request.param("command"), Some("CheckDomain"));
    assert_eq!(request.param("output_format"), Some("json"));
    assert_eq!(request.param("domain"), Some("example.com"));
}

#[tokio::test]
async fn every_request_carries_the_injected_parameters() {
    let transport = MockTransport::new();
    let client = api(false, transport.clone());

    client.call("RenewDomain", vec![("domain", "example.com".to_string())])
        .await
        .unwrap();

    let request = transport.only_request();
    for key in ["command", "s_login", "s_pw", "output_format"] {
        assert!(request.param(key).is_some(), "missing injected key {key}");
    }
}

#[tokio::test]
async fn malformed_body_is_an_invalid_response_with_raw_text() {
    let transport = MockTransport::with_response("<html>error</html>");
    let client = api(false, transport);

    let err = client.call("CheckDomain", vec![]).await.unwrap_err();
    match err {
        Error::InvalidResponse(raw) => assert_eq!(raw, "<html>error</html>"),
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn non_object_json_is_an_invalid_response() {
    let transport = MockTransport::with_response(r#"["not","an","object"]"#);
    let client = api(false, transport);

    let err = client.call("CheckDomain", vec![]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn error_code_surfaces_the_registrar_description() {
    let transport =
        MockTransport::with_response(r#"{"code":2303,"description":"Object does not exist"}"#);
    let client = api(false, transport);

    let err = client.call("StatusDomain", vec![]).await.unwrap_err();
    match err {
        Error::Api(message) => assert_eq!(message, "Object does not exist"),
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn error_code_without_description_gets_generic_message() {
    let transport = MockTransport::with_response(r#"{"code":549}"#);
    let client = api(false, transport);

    let err = client.call("StatusDomain", vec![]).await.unwrap_err();
    match err {
        Error::Api(message) => assert_eq!(message, "Unknown CentralNic API error"),
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_code_is_an_api_error() {
    let transport = MockTransport::with_response(r#"{"description":"no code at all"}"#);
    let client = api(false, transport);

    let err = client.call("StatusDomain", vec![]).await.unwrap_err();
    assert!(matches!(err, Error::Api(_)));
}

#[tokio::test]
async fn numeric_string_code_is_accepted() {
    let transport = MockTransport::with_response(r#"{"code":"200","authcode":"AUTH-1"}"#);
    let client = api(false, transport);

    let envelope = client.call("GetAuthCodeDomain", vec![]).await.unwrap();
    assert_eq!(
        envelope.get("authcode").and_then(|v| v.as_str()),
        Some("AUTH-1")
    );
}

#[tokio::test]
async fn transport_failure_is_wrapped_with_connection_error_prefix() {
    let transport = MockTransport::new();
    transport.queue_err("connection refused");
    let client = api(false, transport);

    let err = client.call("CheckDomain", vec![]).await.unwrap_err();
    match err {
        Error::Transport(message) => {
            assert_eq!(message, "CentralNic API connection error: connection refused");
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn success_envelope_exposes_payload_fields() {
    let transport = MockTransport::with_response(
        r#"{"code":200,"status":{"example.com":"available"},"description":"Command completed"}"#,
    );
    let client = api(false, transport);

    let envelope = client.call("CheckDomain", vec![]).await.unwrap();
    assert_eq!(
        envelope
            .get("status")
            .and_then(|s| s.get("example.com"))
            .and_then(|v| v.as_str()),
        Some("available")
    );
}
