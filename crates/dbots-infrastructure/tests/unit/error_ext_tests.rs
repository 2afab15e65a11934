//! Error context tests

use dbots_domain::Error;
use dbots_infrastructure::ErrorContext;

#[test]
fn test_config_context_wraps_source() {
    let result: Result<u8, std::num::ParseIntError> = "x".parse::<u8>();
    let err = result.config_context("Failed to parse port").unwrap_err();

    match &err {
        Error::Configuration { message, source } => {
            assert!(message.starts_with("Failed to parse port: "));
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_with_config_context_is_lazy() {
    let ok: Result<u8, std::num::ParseIntError> = "7".parse::<u8>();
    let value = ok
        .with_config_context(|| -> String { panic!("context built for Ok") })
        .unwrap();
    assert_eq!(value, 7);
}
