use std::env;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tcg_card_bot::config::Config;
use tcg_card_bot::session::cooldown::DEFAULT_COOLDOWN;
use tcg_card_bot::session::store::DEFAULT_SESSION_TTL;
use tcg_card_bot::tcg::client::DEFAULT_API_URL;

// Tests in this file share the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const OPTIONAL_VARS: [&str; 4] = [
    "POKEMONTCG_API_KEY",
    "POKEMONTCG_API_URL",
    "CARDBOT_SESSION_TTL_SECS",
    "CARDBOT_COOLDOWN_SECS",
];

fn clear_optional() {
    for var in OPTIONAL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[should_panic(expected = "DISCORD_TOKEN environment variable is required")]
fn test_config_missing_token_panics() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    env::remove_var("DISCORD_TOKEN");
    Config::from_env();
}

#[test]
fn test_config_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    clear_optional();
    env::set_var("DISCORD_TOKEN", "token-123");

    let config = Config::from_env();
    assert_eq!(config.discord_token, "token-123");
    assert_eq!(config.api_key, None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.session_ttl, DEFAULT_SESSION_TTL);
    assert_eq!(config.cooldown, DEFAULT_COOLDOWN);
}

#[test]
fn test_config_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    env::set_var("DISCORD_TOKEN", "token-123");
    env::set_var("POKEMONTCG_API_KEY", "key-456");
    env::set_var("POKEMONTCG_API_URL", "http://localhost:8080/v2/cards");
    env::set_var("CARDBOT_SESSION_TTL_SECS", "90");
    env::set_var("CARDBOT_COOLDOWN_SECS", "0");

    let config = Config::from_env();
    clear_optional();

    assert_eq!(config.api_key.as_deref(), Some("key-456"));
    assert_eq!(config.api_url, "http://localhost:8080/v2/cards");
    assert_eq!(config.session_ttl, Duration::from_secs(90));
    assert_eq!(config.cooldown, Duration::ZERO);
}

#[test]
fn test_config_empty_api_key_is_ignored() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    clear_optional();
    env::set_var("DISCORD_TOKEN", "token-123");
    env::set_var("POKEMONTCG_API_KEY", "");

    let config = Config::from_env();
    clear_optional();

    assert_eq!(config.api_key, None);
}
