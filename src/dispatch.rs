//! Routing of inbound events onto the session store.
//!
//! Nothing here talks to Discord; `commands::card` and `events::component`
//! render whatever these functions decide.

use serenity::model::id::UserId;

use crate::session::{Direction, Session, SessionStore};
use crate::tcg::client::{sanitize_query, LookupError};
use crate::tcg::format::{self, Format};
use crate::tcg::models::Card;

pub const SELECT_MENU: &str = "card_select";
pub const PREVIOUS_PAGE: &str = "card_prev";
pub const NEXT_PAGE: &str = "card_next";

/// Custom id for a component of `session`, owned by `owner`: `{kind}:{user_id}:{generation}`.
pub fn component_id(kind: &str, owner: UserId, session: &Session) -> String {
    format!("{kind}:{owner}:{}", session.generation)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentAction {
    Select {
        owner: UserId,
        generation: u64,
        index: usize,
    },
    Navigate {
        owner: UserId,
        generation: u64,
        direction: Direction,
    },
}

impl ComponentAction {
    pub fn owner(&self) -> UserId {
        match self {
            Self::Select { owner, .. } | Self::Navigate { owner, .. } => *owner,
        }
    }
}

/// Decode a component interaction. Ids and values this bot did not produce yield `None`.
pub fn parse_component(custom_id: &str, values: &[String]) -> Option<ComponentAction> {
    let mut parts = custom_id.split(':');
    let (kind, owner, generation) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let owner = owner
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)?;
    let generation = generation.parse::<u64>().ok()?;

    let direction = match kind {
        SELECT_MENU => {
            let index = values.first()?.parse().ok()?;
            return Some(ComponentAction::Select {
                owner,
                generation,
                index,
            });
        }
        PREVIOUS_PAGE => Direction::Previous,
        NEXT_PAGE => Direction::Next,
        _ => return None,
    };
    Some(ComponentAction::Navigate {
        owner,
        generation,
        direction,
    })
}

#[derive(Clone, Debug)]
pub enum ComponentReply {
    /// Re-render the menu on the session's current page.
    Page(Session),
    /// Selection resolved; the session is gone.
    Selected { card: Card, format: Format },
    /// The session expired, was replaced by a newer search, or the index no longer exists.
    Expired,
    /// Someone other than the searcher touched the menu.
    NotOwner,
}

pub async fn apply_component(
    store: &SessionStore,
    actor: UserId,
    action: ComponentAction,
) -> ComponentReply {
    if action.owner() != actor {
        return ComponentReply::NotOwner;
    }

    let result = match action {
        ComponentAction::Navigate {
            generation,
            direction,
            ..
        } => store
            .navigate(actor, generation, direction)
            .await
            .map(ComponentReply::Page),
        ComponentAction::Select {
            generation, index, ..
        } => store
            .finish(actor, generation, index)
            .await
            .map(|(card, format)| ComponentReply::Selected { card, format }),
    };

    result.unwrap_or_else(|e| {
        tracing::debug!(user_id = %actor, "stale card list interaction: {e}");
        ComponentReply::Expired
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Unknown format `{0}`.")]
    InvalidFormat(String),
    #[error("Please enter a card name.")]
    EmptyQuery,
    #[error("Please wait {0} more second(s) before using this command again.")]
    CoolingDown(u64),
    #[error("Error fetching card info.")]
    Lookup(#[from] LookupError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub format: Format,
    pub query: String,
}

/// Validate raw command input before any lookup happens.
pub fn parse_search(format: &str, name: &str) -> Result<SearchRequest, SearchError> {
    let format = Format::parse(format)
        .ok_or_else(|| SearchError::InvalidFormat(format.trim().to_string()))?;
    let query = sanitize_query(name);
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(SearchRequest { format, query })
}

#[derive(Clone, Debug)]
pub enum SearchOutcome {
    NoResults(SearchRequest),
    Started(Session),
}

/// Filter a finished lookup and, when anything is left, open a session for `user_id`.
///
/// A search with no legal cards leaves any existing session alone.
pub async fn complete_search(
    store: &SessionStore,
    user_id: UserId,
    request: SearchRequest,
    cards: Vec<Card>,
) -> SearchOutcome {
    let fetched = cards.len();
    let legal = format::filter_format(cards, request.format);
    tracing::info!(
        %user_id,
        format = %request.format,
        query = %request.query,
        fetched,
        legal = legal.len(),
        "card search"
    );

    if legal.is_empty() {
        return SearchOutcome::NoResults(request);
    }
    let session = store
        .put(user_id, legal, request.format, request.query)
        .await;
    SearchOutcome::Started(session)
}
