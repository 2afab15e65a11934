//! End-to-end posting through the null transport

use std::sync::Arc;

use dbots_application::{Poster, RequestOptions, ServiceClient};
use dbots_domain::ports::stats::StaticStats;
use dbots_domain::value_objects::{ClientStats, Count, Method, PostOptions, RequestForm};
use dbots_domain::{Error, HttpTransport};
use dbots_providers::{NullTransport, builtin_registry, resolve_service};
use serde_json::json;

#[tokio::test]
async fn test_post_records_composed_request() {
    let transport = NullTransport::new();
    let service = resolve_service("space-bot-list.xyz", &[]).unwrap();
    let options = PostOptions::new("123", 50u64)
        .with_token("T")
        .with_user_count(900u64);

    let response = service.post(&transport, &options).await.unwrap();
    assert_eq!(response.status, 200);

    let sent = transport.sent().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "https://space-bot-list.xyz/api/bots/123");
    assert_eq!(sent[0].body, Some(json!({ "guilds": 50, "users": 900 })));
    assert_eq!(transport.transport_name(), "null");
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let transport = NullTransport::new();
    let service = resolve_service("topgg", &[]).unwrap();

    let err = service
        .post(&transport, &PostOptions::new("123", 1u64))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RequiresToken { .. }));
    assert!(transport.sent().unwrap().is_empty());
}

#[tokio::test]
async fn test_client_bot_lookup() {
    let transport = Arc::new(NullTransport::new());
    let service = resolve_service("top.gg", &[]).unwrap().clone();
    let client = ServiceClient::new(service, Some("T".to_string()), transport.clone());

    client.get_bot("42").await.unwrap();
    client
        .request(RequestForm::get("/bots").with_query("search", "x"), RequestOptions::default())
        .await
        .unwrap();

    let sent = transport.sent().unwrap();
    assert_eq!(sent[0].url, "https://top.gg/api/bots/42");
    assert_eq!(sent[0].header("authorization"), Some("T"));
    assert_eq!(sent[1].url, "https://top.gg/api/bots?search=x");
    assert_eq!(sent[1].query, None);
}

#[tokio::test]
async fn test_deprecated_alias_supports_bot_lookup() {
    let transport = Arc::new(NullTransport::new());
    let service = resolve_service("discordbots.org", &[]).unwrap().clone();
    let client = ServiceClient::new(service, Some("T".to_string()), transport.clone());

    client.get_bot("42").await.unwrap();

    let sent = transport.sent().unwrap();
    assert_eq!(sent[0].url, "https://top.gg/api/bots/42");
    assert_eq!(sent[0].header("authorization"), Some("T"));
}

#[tokio::test]
async fn test_poster_posts_to_every_keyed_service() {
    let transport = Arc::new(NullTransport::new());
    let stats = StaticStats::new(ClientStats {
        client_id: "123".to_string(),
        server_count: Count::PerShard(vec![20, 30]),
        ..Default::default()
    });
    let poster = Poster::new(builtin_registry(), transport.clone(), Arc::new(stats))
        .with_api_key("top.gg", "A")
        .with_api_key("discordbotsgg", "B");

    let outcomes = poster.post_all().await.unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|outcome| outcome.is_success()));

    let mut urls: Vec<String> = transport.sent().unwrap().into_iter().map(|f| f.url).collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            "https://discord.bots.gg/api/v1/bots/123/stats",
            "https://top.gg/api/bots/123/stats",
        ]
    );
}
