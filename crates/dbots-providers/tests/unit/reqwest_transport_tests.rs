//! Tests for the reqwest transport against a local mock server

use std::time::Duration;

use dbots_domain::value_objects::{PostOptions, RequestForm};
use dbots_domain::{Error, HttpTransport};
use dbots_providers::{HttpClientConfig, ReqwestTransport, resolve_service};
use mockito::Matcher;
use serde_json::json;

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(HttpClientConfig::with_timeout(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_sends_method_headers_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bots/123/stats")
        .match_header("authorization", "T")
        .match_body(Matcher::Json(json!({ "server_count": 5 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let form = RequestForm::post(format!("{}/bots/123/stats", server.url()))
        .with_authorization("T")
        .with_body(json!({ "server_count": 5 }));
    let response = transport().execute(&form).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "ok": true }));
    assert_eq!(
        response.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_non_json_and_empty_bodies() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/text")
        .with_status(200)
        .with_body("hello")
        .create_async()
        .await;
    server
        .mock("GET", "/empty")
        .with_status(204)
        .create_async()
        .await;

    let transport = transport();
    let text = transport
        .execute(&RequestForm::get(format!("{}/text", server.url())))
        .await
        .unwrap();
    assert_eq!(text.body, json!("hello"));

    let empty = transport
        .execute(&RequestForm::get(format!("{}/empty", server.url())))
        .await
        .unwrap();
    assert_eq!(empty.status, 204);
    assert_eq!(empty.body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/bots/1/stats")
        .with_status(401)
        .with_body("Unauthorized")
        .create_async()
        .await;

    let form = RequestForm::post(format!("{}/bots/1/stats", server.url()));
    let err = transport().execute(&form).await.unwrap_err();

    match err {
        Error::Transport { status, body, .. } => {
            assert_eq!(status, Some(401));
            assert_eq!(body.as_deref(), Some("Unauthorized"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_descriptor_attributes_transport_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/stats")
        .with_status(500)
        .create_async()
        .await;

    let base = resolve_service("topgg", &[]).unwrap().clone();
    let service = base
        .with_base_url(server.url())
        .with_post_formatter(|options: &PostOptions| {
            Ok(RequestForm::post("/stats").with_authorization(options.token().unwrap_or_default()))
        });

    let err = service
        .post(&transport(), &PostOptions::new("1", 1u64).with_token("T"))
        .await
        .unwrap_err();
    assert_eq!(err.service(), Some("topgg"));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_connection_failure_has_no_status() {
    let form = RequestForm::get("http://127.0.0.1:1/unreachable");
    let err = transport().execute(&form).await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: None, .. }));
}
