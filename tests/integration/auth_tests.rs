use crate::integration::common;
use kis_client::constants::paths;
use kis_client::error::AppError;
use mockito::{Matcher, Server};
use serde_json::json;
use tokio_test::block_on;

#[test]
fn test_issue_token() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", paths::ISSUE_TOKEN)
        .match_header("appkey", "test_app_key")
        .match_body(Matcher::Json(json!({
            "grant_type": "client_credentials",
            "appkey": "test_app_key",
            "appsecret": "test_app_secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": "eyJ0eXAi",
                "access_token_token_expired": "2024-01-02 10:00:00",
                "token_type": "Bearer",
                "expires_in": 86400
            })
            .to_string(),
        )
        .create();

    let client = common::create_test_client(&server.url());
    let token = block_on(client.issue_token()).expect("token");

    assert_eq!(token.access_token, "eyJ0eXAi");
    assert_eq!(token.expires_at.as_deref(), Some("2024-01-02 10:00:00"));
    assert!(!token.is_expired(60));
    mock.assert();
}

#[test]
fn test_issue_token_rejected() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", paths::ISSUE_TOKEN)
        .with_status(403)
        .with_body(r#"{"error_description":"유효하지 않은 AppKey입니다.","error_code":"EGW00103"}"#)
        .create();

    let client = common::create_test_client(&server.url());
    match block_on(client.issue_token()).unwrap_err() {
        AppError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("EGW00103"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    mock.assert();
}

#[test]
fn test_issue_token_with_unexpected_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", paths::ISSUE_TOKEN)
        .with_status(200)
        .with_body(r#"{"token":"x"}"#)
        .create();

    let client = common::create_test_client(&server.url());
    let err = block_on(client.issue_token()).unwrap_err();
    assert!(matches!(err, AppError::SchemaValidation { .. }));
    mock.assert();
}
