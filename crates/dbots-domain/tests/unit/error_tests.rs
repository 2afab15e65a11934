//! Unit tests for domain error types

use dbots_domain::Error;

#[test]
fn test_requires_token_error() {
    let error = Error::requires_token("topgg");
    match &error {
        Error::RequiresToken { service } => assert_eq!(service, "topgg"),
        _ => panic!("Expected RequiresToken error"),
    }
    assert!(error.is_recoverable());
    assert_eq!(error.service(), Some("topgg"));
}

#[test]
fn test_called_from_base_is_not_recoverable() {
    let error = Error::called_from_base("post");
    assert!(!error.is_recoverable());
    assert!(error.to_string().contains("post"));
    assert_eq!(error.service(), None);
}

#[test]
fn test_invalid_service_display() {
    let error = Error::invalid_service("nope");
    assert_eq!(error.to_string(), "\"nope\" is an invalid service");
}

#[test]
fn test_invalid_options_carries_field() {
    let error = Error::invalid_options("carbon", "client_id", "must not be empty");
    match error {
        Error::InvalidOptions {
            service,
            field,
            message,
        } => {
            assert_eq!(service, "carbon");
            assert_eq!(field, "client_id");
            assert_eq!(message, "must not be empty");
        }
        _ => panic!("Expected InvalidOptions error"),
    }
}

#[test]
fn test_http_status_error() {
    let error = Error::http_status("discordboats", 401, "unauthorized".to_string());
    assert_eq!(error.status(), Some(401));
    assert_eq!(error.service(), Some("discordboats"));
    match error {
        Error::Transport { body, .. } => assert_eq!(body.as_deref(), Some("unauthorized")),
        _ => panic!("Expected Transport error"),
    }
}

#[test]
fn test_for_service_fills_missing_key() {
    let error = Error::http_status("", 500, String::new()).for_service("topgg");
    assert_eq!(error.service(), Some("topgg"));
    assert_eq!(error.status(), Some(500));
}

#[test]
fn test_for_service_keeps_existing_key() {
    let error = Error::transport("carbon", "connection refused").for_service("topgg");
    assert_eq!(error.service(), Some("carbon"));
}

#[test]
fn test_for_service_ignores_other_variants() {
    let error = Error::NoApiKeys.for_service("topgg");
    assert!(matches!(error, Error::NoApiKeys));
}

#[test]
fn test_invalid_url_is_attributed_by_for_service() {
    let error = Error::invalid_url("/bots/1", "relative URL without a base");
    assert_eq!(error.service(), None);

    let error = error.for_service("mylist");
    assert_eq!(error.service(), Some("mylist"));
    assert!(error.to_string().contains("\"mylist\""));
}
