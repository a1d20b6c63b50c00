pub mod commands;
pub mod config;
pub mod dispatch;
pub mod events;
pub mod session;
pub mod tcg;
pub mod utils;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub struct Data {
    pub card_client: tcg::CardClient,
    pub sessions: session::SessionStore,
    pub cooldowns: session::Cooldowns,
}

impl Data {
    pub fn new(config: &config::Config, http_client: reqwest::Client) -> Self {
        Self {
            card_client: tcg::CardClient::new(
                http_client,
                config.api_url.clone(),
                config.api_key.clone(),
            ),
            sessions: session::SessionStore::new(config.session_ttl),
            cooldowns: session::Cooldowns::new(config.cooldown),
        }
    }
}
