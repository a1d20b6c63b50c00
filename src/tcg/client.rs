use super::models::{Card, CardsResponse};

pub const DEFAULT_API_URL: &str = "https://api.pokemontcg.io/v2/cards";

/// Errors that can occur during a card lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Network or HTTP-level error from reqwest.
    #[error("could not reach the card database: {0}")]
    Network(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("card database returned {0}")]
    Status(reqwest::StatusCode),
    /// The response body was not a card list.
    #[error("could not read the card database response: {0}")]
    Deserialize(String),
}

/// Client for the pokemontcg.io card search endpoint.
#[derive(Clone)]
pub struct CardClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl CardClient {
    pub fn new(http: reqwest::Client, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            api_key,
        }
    }

    /// Search cards by name. `name` is sanitized again before use.
    ///
    /// Returns every card the API sent back, unfiltered and in API order.
    /// A single request is made; failures are not retried.
    pub async fn search(&self, name: &str) -> Result<Vec<Card>, LookupError> {
        let q = name_query(&sanitize_query(name));

        let mut request = self.http.get(&self.api_url).query(&[("q", q.as_str())]);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let text = response.text().await?;
        let body: CardsResponse =
            serde_json::from_str(&text).map_err(|e| LookupError::Deserialize(e.to_string()))?;

        tracing::debug!(query = %q, count = body.data.len(), "card lookup finished");
        Ok(body.data)
    }
}

fn is_query_char(c: char) -> bool {
    c.is_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || matches!(c, '-' | '\'' | '’' | '‘' | '!' | '.')
}

/// Strip everything outside the accepted name alphabet and collapse whitespace.
///
/// Quotes and colons are always dropped: the API uses them as query syntax.
pub fn sanitize_query(raw: &str) -> String {
    let kept: String = raw.chars().filter(|&c| is_query_char(c)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the `q` parameter for an exact-phrase name search.
pub fn name_query(sanitized: &str) -> String {
    format!("name:\"{sanitized}\"")
}
