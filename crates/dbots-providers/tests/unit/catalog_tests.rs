//! Tests for the built-in service table

use std::sync::Arc;

use dbots_domain::Error;
use dbots_domain::value_objects::PostOptions;
use dbots_providers::{builtin_registry, get_service, list_services, resolve_service};

const EXPECTED_ORDER: [&str; 14] = [
    "discordbotsgg",
    "discordbotsorg",
    "topgg",
    "botsfordiscord",
    "botsondiscord",
    "discordappsdev",
    "carbon",
    "discordbotlist",
    "divinediscordbots",
    "discordboats",
    "botlistspace",
    "discordbotworld",
    "glennbotlist",
    "spacebotslist",
];

#[test]
fn test_list_keeps_definition_order() {
    assert_eq!(builtin_registry().keys(), EXPECTED_ORDER);
    assert_eq!(list_services().len(), EXPECTED_ORDER.len());
}

#[test]
fn test_every_alias_resolves_to_its_service() {
    for service in list_services() {
        assert!(!service.aliases.is_empty(), "{} has no aliases", service.key);
        for alias in &service.aliases {
            let resolved = resolve_service(alias, &[]).expect("alias resolves");
            assert_eq!(resolved.key, service.key, "alias {alias}");

            let upper = alias.to_uppercase();
            let resolved = resolve_service(&upper, &[]).expect("upper-case alias resolves");
            assert_eq!(resolved.key, service.key, "alias {upper}");
        }
    }
}

#[test]
fn test_unknown_and_empty_keys() {
    assert!(resolve_service("nonexistent", &[]).is_none());
    assert!(resolve_service("", &[]).is_none());

    let err = get_service("nonexistent", &[]).unwrap_err();
    assert!(matches!(err, Error::InvalidService { .. }));
    assert_eq!(err.to_string(), "\"nonexistent\" is an invalid service");
}

#[test]
fn test_builtins_require_tokens() {
    let options = PostOptions::new("123", 10u64);
    for service in list_services() {
        assert!(service.requires_token, "{}", service.key);
        let err = service.prepare_post(&options).unwrap_err();
        assert!(
            matches!(err, Error::RequiresToken { ref service } if !service.is_empty()),
            "{}: {err:?}",
            service.key
        );
    }
}

#[test]
fn test_empty_client_id_is_invalid_options() {
    let options = PostOptions::new("", 10u64).with_token("T");
    for service in list_services().into_iter().filter(|s| s.key != "carbon") {
        let err = service.prepare_post(&options).unwrap_err();
        assert!(
            matches!(err, Error::InvalidOptions { field: "client_id", .. }),
            "{}: {err:?}",
            service.key
        );
    }
}

#[test]
fn test_deprecated_alias_shares_topgg_formatter() {
    let topgg = resolve_service("top.gg", &[]).unwrap();
    let legacy = resolve_service("discordbots.org", &[]).unwrap();

    assert!(legacy.deprecated);
    assert!(!topgg.deprecated);
    assert_eq!(legacy.base_url, topgg.base_url);
    assert_eq!(legacy.requires_token, topgg.requires_token);
    assert!(Arc::ptr_eq(
        legacy.post_formatter.as_ref().unwrap(),
        topgg.post_formatter.as_ref().unwrap()
    ));

    let options = PostOptions::new("42", 7u64).with_token("T");
    assert_eq!(
        legacy.prepare_post(&options).unwrap(),
        topgg.prepare_post(&options).unwrap()
    );
}

#[test]
fn test_space_bots_list_metadata() {
    let service = resolve_service("space-bot-list.xyz", &[]).unwrap();
    assert_eq!(service.key, "spacebotslist");
    assert_eq!(service.display_name, "Space Bots List");
    assert_eq!(service.website_url, "https://space-bot-list.xyz/");
    assert_eq!(
        service.logo_url.as_deref(),
        Some(
            "https://cdn.discordapp.com/avatars/546742409409593354/123b9b0a54b45d99627215c7154580af.webp?size=256"
        )
    );
}
