//! Service registry tests

use dbots_application::{ServiceDescriptor, ServiceRegistry};
use dbots_domain::{Error, PostOptions, RequestForm};

use crate::support::{absolute_service, example_service};

fn registry() -> ServiceRegistry {
    ServiceRegistry::new(vec![
        example_service(),
        ServiceDescriptor::base(),
        absolute_service(),
    ])
}

#[test]
fn test_resolve_is_case_insensitive() {
    let registry = registry();
    let service = registry.resolve("EXAMPLE.TEST", &[]).unwrap();
    assert_eq!(service.key, "example");
}

#[test]
fn test_resolve_unknown_is_none() {
    assert!(registry().resolve("missing", &[]).is_none());
    assert!(registry().resolve("", &[]).is_none());
}

#[test]
fn test_get_or_invalid_reports_key() {
    let registry = registry();
    match registry.get_or_invalid("missing", &[]).unwrap_err() {
        Error::InvalidService { service } => assert_eq!(service, "missing"),
        other => panic!("Expected InvalidService, got {other:?}"),
    }
}

#[test]
fn test_every_alias_round_trips() {
    let registry = registry();
    for service in registry.list() {
        assert!(!service.aliases.is_empty());
        for alias in &service.aliases {
            let resolved = registry.resolve(&alias.to_lowercase(), &[]).unwrap();
            assert!(std::ptr::eq(resolved, service), "alias {alias} resolved elsewhere");
        }
    }
}

#[test]
fn test_list_skips_base_and_keeps_order() {
    let registry = registry();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.keys(), vec!["example", "absolute"]);
}

#[test]
fn test_customs_are_resolved_after_builtins() {
    let custom = ServiceDescriptor::new("mylist")
        .with_aliases(["mylist"])
        .with_post_formatter(|_: &PostOptions| Ok(RequestForm::post("https://my.test/")));
    let customs = vec![custom];

    let registry = registry();
    let service = registry.resolve("MyList", &customs).unwrap();
    assert_eq!(service.key, "mylist");
}

#[test]
fn test_builtins_win_over_customs_with_same_alias() {
    let shadow = ServiceDescriptor::new("shadow")
        .with_aliases(["example"])
        .with_post_formatter(|_: &PostOptions| Ok(RequestForm::post("https://evil.test/")));
    let customs = vec![shadow];

    let registry = registry();
    let service = registry.resolve("example", &customs).unwrap();
    assert_eq!(service.key, "example");
}

#[test]
fn test_incomplete_customs_are_skipped() {
    let customs = vec![
        ServiceDescriptor::new("noformatter").with_aliases(["mine"]),
        ServiceDescriptor::new("noaliases")
            .with_post_formatter(|_: &PostOptions| Ok(RequestForm::post("https://a.test/"))),
    ];
    let registry = registry();
    assert!(registry.resolve("mine", &customs).is_none());
    assert!(registry.resolve("noaliases", &customs).is_none());
}
