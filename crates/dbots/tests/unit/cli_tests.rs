//! CLI parsing and command tests, run against the null transport

use clap::Parser;
use dbots::cli::{Cli, Command, execute};
use dbots::domain::Count;
use dbots::infrastructure::{AppConfig, AppContext};

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.poster.client_id = "123".to_string();
    config.poster.server_count = Count::Total(50);
    config.poster.user_count = Some(Count::Total(900));
    config
        .poster
        .api_keys
        .insert("space-bot-list.xyz".to_string(), "T".to_string());
    config
}

async fn run(command: Command, config: AppConfig) -> (anyhow::Result<()>, String) {
    let context = AppContext::dry_run(config).unwrap();
    let mut out = Vec::new();
    let result = execute(&command, &context, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_commands() {
    let cli = Cli::try_parse_from(["dbots", "post", "top.gg", "--dry-run"]).unwrap();
    assert!(cli.dry_run);
    assert_eq!(
        cli.command,
        Command::Post {
            service: "top.gg".to_string()
        }
    );

    let cli = Cli::try_parse_from(["dbots", "--config", "x.toml", "post-all"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
    assert_eq!(cli.command, Command::PostAll);

    assert!(Cli::try_parse_from(["dbots", "post"]).is_err());
}

#[tokio::test]
async fn test_services_lists_builtins_in_order() {
    let (result, out) = run(Command::Services { json: false }, AppConfig::default()).await;
    result.unwrap();

    let keys: Vec<&str> = out
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(keys.first(), Some(&"discordbotsgg"));
    assert_eq!(keys.last(), Some(&"spacebotslist"));
    assert_eq!(keys.len(), 14);
    assert!(out.contains("discordbots.org (deprecated)"));
}

#[tokio::test]
async fn test_services_json() {
    let (result, out) = run(Command::Services { json: true }, AppConfig::default()).await;
    result.unwrap();

    let entries: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 14);
    assert_eq!(entries[2]["key"], "topgg");
    assert_eq!(entries[1]["deprecated"], true);
}

#[tokio::test]
async fn test_post_uses_configured_key() {
    let command = Command::Post {
        service: "space-bot-list.xyz".to_string(),
    };
    let (result, out) = run(command, config()).await;
    result.unwrap();
    assert_eq!(out.trim(), "space-bot-list.xyz: 200");
}

#[tokio::test]
async fn test_post_without_key_fails() {
    let command = Command::Post {
        service: "topgg".to_string(),
    };
    let (result, _) = run(command, config()).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("without an API key"), "{err}");
}

#[tokio::test]
async fn test_post_all_reports_each_service() {
    let mut config = config();
    config
        .poster
        .api_keys
        .insert("nonexistent".to_string(), "X".to_string());

    let (result, out) = run(Command::PostAll, config).await;
    assert!(result.is_err());
    assert!(out.contains("space-bot-list.xyz: 200"));
    assert!(out.contains("nonexistent: error: \"nonexistent\" is an invalid service"));
}

#[tokio::test]
async fn test_bot_lookup() {
    let command = Command::Bot {
        service: "spacebotslist".to_string(),
        id: "42".to_string(),
    };
    let (result, out) = run(command, config()).await;
    result.unwrap();
    assert_eq!(out.trim(), "spacebotslist: 200");

    let command = Command::Bot {
        service: "carbon".to_string(),
        id: "42".to_string(),
    };
    let (result, _) = run(command, config()).await;
    assert!(result.is_err());
}

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dbots.toml");
    std::fs::write(&path, "[poster]\nclient_id = \"abc\"\n").unwrap();

    let cli = Cli::try_parse_from(["dbots", "--config", path.to_str().unwrap(), "services"])
        .unwrap();
    let config = cli.load_config().unwrap();
    assert_eq!(config.poster.client_id, "abc");
}
