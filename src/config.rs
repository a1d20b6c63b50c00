use std::time::Duration;

use crate::session::cooldown::DEFAULT_COOLDOWN;
use crate::session::store::DEFAULT_SESSION_TTL;
use crate::tcg::client::DEFAULT_API_URL;

pub struct Config {
    pub discord_token: String,
    pub api_key: Option<String>,
    pub api_url: String,
    pub session_ttl: Duration,
    pub cooldown: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .expect("DISCORD_TOKEN environment variable is required"),
            api_key: std::env::var("POKEMONTCG_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            api_url: std::env::var("POKEMONTCG_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            session_ttl: secs_or(
                std::env::var("CARDBOT_SESSION_TTL_SECS").ok(),
                DEFAULT_SESSION_TTL,
            ),
            cooldown: secs_or(std::env::var("CARDBOT_COOLDOWN_SECS").ok(), DEFAULT_COOLDOWN),
        }
    }
}

fn secs_or(value: Option<String>, default: Duration) -> Duration {
    value
        .and_then(|v| v.trim().parse().ok())
        .map_or(default, Duration::from_secs)
}
