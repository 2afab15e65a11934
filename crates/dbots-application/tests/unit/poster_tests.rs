//! Poster fan-out tests

use std::sync::Arc;

use dbots_application::{Poster, ServiceRegistry};
use dbots_domain::ports::StaticStats;
use dbots_domain::{ClientStats, Count, Error};
use serde_json::json;

use crate::support::{RecordingTransport, absolute_service, example_service};

fn stats() -> Arc<StaticStats> {
    Arc::new(StaticStats::new(ClientStats {
        client_id: "123".to_string(),
        server_count: Count::from(vec![10, 15]),
        ..Default::default()
    }))
}

fn poster(transport: Arc<RecordingTransport>) -> Poster {
    let registry = Arc::new(ServiceRegistry::new(vec![example_service()]));
    Poster::new(registry, transport, stats())
}

#[tokio::test]
async fn test_post_without_keys() {
    let poster = poster(Arc::new(RecordingTransport::ok()));
    assert!(matches!(poster.post("example").await, Err(Error::NoApiKeys)));
    assert!(matches!(poster.post_all().await, Err(Error::NoApiKeys)));
}

#[tokio::test]
async fn test_post_uses_api_key_and_summed_stats() {
    let transport = Arc::new(RecordingTransport::ok());
    let poster = poster(transport.clone()).with_api_key("example", "secret");

    poster.post("example").await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header("Authorization"), Some("secret"));
    assert_eq!(sent[0].body, Some(json!({ "server_count": 25 })));
}

#[tokio::test]
async fn test_post_finds_key_by_alias() {
    let transport = Arc::new(RecordingTransport::ok());
    let poster = poster(transport.clone()).with_api_key("example.test", "secret");

    poster.post("example").await.unwrap();
    assert_eq!(transport.sent()[0].header("Authorization"), Some("secret"));
}

#[tokio::test]
async fn test_post_service_without_key() {
    let transport = Arc::new(RecordingTransport::ok());
    let poster = poster(transport)
        .with_api_key("other", "x")
        .with_custom_service(absolute_service());

    match poster.post("absolute").await.unwrap_err() {
        Error::ServiceNoKey { service } => assert_eq!(service, "absolute"),
        other => panic!("Expected ServiceNoKey, got {other:?}"),
    }
}

#[tokio::test]
async fn test_post_all_attributes_each_outcome() {
    let transport = Arc::new(RecordingTransport::ok());
    let poster = poster(transport.clone())
        .with_api_keys([("example", "secret"), ("unknown", "x")])
        .with_custom_service(absolute_service())
        .with_api_key("absolute", "abs");

    let outcomes = poster.post_all().await.unwrap();
    assert_eq!(outcomes.len(), 3);

    let by_service = |name: &str| outcomes.iter().find(|o| o.service == name).unwrap();
    assert!(by_service("example").is_success());
    assert!(by_service("absolute").is_success());
    assert!(matches!(
        by_service("unknown").result,
        Err(Error::InvalidService { .. })
    ));
    assert_eq!(transport.sent().len(), 2);
}

#[tokio::test]
async fn test_post_all_keeps_going_after_transport_failure() {
    let transport = Arc::new(RecordingTransport::with_status(500));
    let poster = poster(transport.clone())
        .with_custom_service(absolute_service())
        .with_api_keys([("example", "a"), ("absolute", "b")]);

    let outcomes = poster.post_all().await.unwrap();
    assert_eq!(outcomes.len(), 2);
    for outcome in &outcomes {
        let err = outcome.result.as_ref().unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.service(), Some(outcome.service.as_str()));
    }
    assert_eq!(transport.sent().len(), 2);
}
