use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use studio_cli::auth::{
    AuthError, AuthorizationClient, DeviceCodePoll, DeviceCodeSession, StudioAuthClient,
    TokenScope, DEFAULT_SCOPES,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_client() -> StudioAuthClient {
    StudioAuthClient::new().with_poll_interval(Duration::from_millis(10))
}

fn session_for(server: &MockServer) -> DeviceCodeSession {
    DeviceCodeSession {
        token_name: "ci-token".to_string(),
        hostname: server.uri(),
        scopes: DEFAULT_SCOPES.to_vec(),
        verification_uri: format!("{}/auth/device-login", server.uri()),
        user_code: "1A2B3C4D".to_string(),
        device_code: "device-1".to_string(),
        token_uri: format!("{}/api/v1/device-login/token", server.uri()),
        expires_at: Utc::now() + chrono::Duration::minutes(10),
    }
}

#[tokio::test]
async fn start_returns_session_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "device_code": "device-123",
            "user_code": "1A2B3C4D",
            "verification_uri": "https://studio.example/auth/device-login",
            "token_uri": "https://studio.example/api/v1/device-login/token",
            "expires_in": 300
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    let session = client
        .start("ci-token", &server.uri(), &DEFAULT_SCOPES)
        .await
        .expect("start device login");

    assert_eq!(session.token_name, "ci-token");
    assert_eq!(session.hostname, server.uri());
    assert_eq!(session.device_code, "device-123");
    assert_eq!(session.user_code, "1A2B3C4D");
    assert_eq!(
        session.verification_uri,
        "https://studio.example/auth/device-login"
    );
    assert!(session.expires_at > Utc::now());
}

#[tokio::test]
async fn start_forwards_ordered_scopes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login"))
        .and(body_partial_json(json!({
            "client_name": "studio-cli",
            "token_name": "ci-token",
            "scopes": ["live", "view_url"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "device_code": "device-123",
            "user_code": "1A2B3C4D",
            "verification_uri": "https://studio.example/auth/device-login",
            "token_uri": "https://studio.example/api/v1/device-login/token",
            "expires_in": 300
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    client
        .start(
            "ci-token",
            &server.uri(),
            &[TokenScope::Live, TokenScope::ViewUrl],
        )
        .await
        .expect("scopes forwarded in order");
}

#[tokio::test]
async fn start_non_success_status_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    let result = client.start("ci-token", &server.uri(), &DEFAULT_SCOPES).await;
    match result {
        Err(AuthError::InvalidResponse(msg)) => assert!(msg.contains("500")),
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn start_malformed_body_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    let result = client.start("ci-token", &server.uri(), &DEFAULT_SCOPES).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn start_unreachable_host_is_network_error() {
    let client = fast_client();
    let result = client
        .start("ci-token", "http://127.0.0.1:1", &DEFAULT_SCOPES)
        .await;
    assert!(matches!(result, Err(AuthError::Network(_))));
}

#[tokio::test]
async fn await_completion_polls_until_authorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "authorization_pending"
        })))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login/token"))
        .and(body_partial_json(json!({ "code": "device-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    let token = client
        .await_completion(&session_for(&server))
        .await
        .expect("completion");
    assert_eq!(token.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn await_completion_expired_detail_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "authorization_expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    let token = client
        .await_completion(&session_for(&server))
        .await
        .expect("completion");
    assert!(token.is_none());
}

#[tokio::test]
async fn await_completion_client_side_expiry_skips_network() {
    let server = MockServer::start().await;
    let mut session = session_for(&server);
    session.expires_at = Utc::now() - chrono::Duration::seconds(1);

    let client = fast_client();
    let token = client.await_completion(&session).await.expect("completion");
    assert!(token.is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn poll_unknown_detail_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "access_denied"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    let result = client.poll_once(&session_for(&server)).await;
    match result {
        Err(AuthError::InvalidResponse(msg)) => assert!(msg.contains("access_denied")),
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn poll_pending_is_pending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/device-login/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "authorization_pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client();
    let result = client
        .poll_once(&session_for(&server))
        .await
        .expect("pending");
    assert!(matches!(result, DeviceCodePoll::Pending));
}
