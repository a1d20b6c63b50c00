use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use serenity::model::id::UserId;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::pagination::{self, Direction, PageOption};
use crate::tcg::format::Format;
use crate::tcg::models::Card;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(600);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no active card list")]
    NotFound,
    #[error("card #{index} is not in the list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("page {page} is outside 0..{total}")]
    PageOutOfRange { page: usize, total: usize },
    #[error("card list {stale} was replaced by a newer search")]
    Superseded { stale: u64 },
}

/// A user's search results and the page they are looking at.
#[derive(Clone, Debug)]
pub struct Session {
    /// Identifies this search; menus rendered from it carry the same number.
    pub generation: u64,
    pub results: Arc<[Card]>,
    pub current_page: usize,
    pub format: Format,
    pub query: String,
}

impl Session {
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.results.len())
    }

    pub fn page_options(&self) -> Vec<PageOption> {
        pagination::page_options(&self.results, self.current_page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    pub fn card(&self, absolute_index: usize) -> Option<&Card> {
        pagination::resolve(&self.results, absolute_index)
    }
}

/// Per-user interaction state.
#[derive(Clone, Debug)]
pub enum SessionState {
    Idle,
    AwaitingSelection(Session),
}

struct Entry {
    session: Session,
    expiry: JoinHandle<()>,
}

fn current_entry(
    sessions: &mut HashMap<UserId, Entry>,
    user_id: UserId,
    generation: u64,
) -> Result<&mut Entry, SessionError> {
    let entry = sessions.get_mut(&user_id).ok_or(SessionError::NotFound)?;
    if entry.session.generation != generation {
        return Err(SessionError::Superseded { stale: generation });
    }
    Ok(entry)
}

struct StoreInner {
    sessions: RwLock<HashMap<UserId, Entry>>,
    ttl: Duration,
    next_generation: AtomicU64,
}

/// Owned map of user to [`Session`]. Cloning shares the same map.
///
/// Every `put` schedules an eviction tied to that session instance. Replacing or
/// removing a session aborts its eviction, and an eviction only ever removes the
/// generation it was scheduled for. Paging does not postpone eviction.
///
/// Paging and selection name the generation they were rendered from; a menu left
/// over from an earlier search gets [`SessionError::Superseded`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                sessions: RwLock::new(HashMap::new()),
                ttl,
                next_generation: AtomicU64::new(0),
            }),
        }
    }

    /// Create or replace the session for `user_id`, starting at page 0.
    pub async fn put(
        &self,
        user_id: UserId,
        results: Vec<Card>,
        format: Format,
        query: String,
    ) -> Session {
        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);
        let session = Session {
            generation,
            results: results.into(),
            current_page: 0,
            format,
            query,
        };

        let previous = {
            let mut sessions = self.inner.sessions.write().await;
            // Spawned under the write lock so the eviction cannot run before the insert.
            let expiry = spawn_expiry(
                Arc::downgrade(&self.inner),
                self.inner.ttl,
                user_id,
                generation,
            );
            sessions.insert(
                user_id,
                Entry {
                    session: session.clone(),
                    expiry,
                },
            )
        };
        if let Some(previous) = previous {
            previous.expiry.abort();
            tracing::debug!(%user_id, "replaced previous session");
        }

        session
    }

    pub async fn get(&self, user_id: UserId) -> Option<Session> {
        let sessions = self.inner.sessions.read().await;
        sessions.get(&user_id).map(|e| e.session.clone())
    }

    pub async fn state(&self, user_id: UserId) -> SessionState {
        match self.get(user_id).await {
            Some(session) => SessionState::AwaitingSelection(session),
            None => SessionState::Idle,
        }
    }

    /// Set the page of an existing session. Never clamps.
    pub async fn set_page(&self, user_id: UserId, page: usize) -> Result<Session, SessionError> {
        let mut sessions = self.inner.sessions.write().await;
        let entry = sessions.get_mut(&user_id).ok_or(SessionError::NotFound)?;
        let total = entry.session.total_pages();
        if page >= total {
            return Err(SessionError::PageOutOfRange { page, total });
        }
        entry.session.current_page = page;
        Ok(entry.session.clone())
    }

    /// Page the session `generation` of `user_id`.
    pub async fn navigate(
        &self,
        user_id: UserId,
        generation: u64,
        direction: Direction,
    ) -> Result<Session, SessionError> {
        let mut sessions = self.inner.sessions.write().await;
        let entry = current_entry(&mut sessions, user_id, generation)?;
        let session = &mut entry.session;
        session.current_page =
            pagination::navigate(session.current_page, session.results.len(), direction);
        Ok(session.clone())
    }

    /// Look up a card by absolute index without ending the session.
    pub async fn resolve(
        &self,
        user_id: UserId,
        absolute_index: usize,
    ) -> Result<Card, SessionError> {
        let sessions = self.inner.sessions.read().await;
        let entry = sessions.get(&user_id).ok_or(SessionError::NotFound)?;
        entry
            .session
            .card(absolute_index)
            .cloned()
            .ok_or(SessionError::IndexOutOfRange {
                index: absolute_index,
                len: entry.session.results.len(),
            })
    }

    /// Resolve a selection from session `generation` and end it. On error the session is kept.
    pub async fn finish(
        &self,
        user_id: UserId,
        generation: u64,
        absolute_index: usize,
    ) -> Result<(Card, Format), SessionError> {
        let mut sessions = self.inner.sessions.write().await;
        let entry = current_entry(&mut sessions, user_id, generation)?;
        let card = entry
            .session
            .card(absolute_index)
            .cloned()
            .ok_or(SessionError::IndexOutOfRange {
                index: absolute_index,
                len: entry.session.results.len(),
            })?;
        let format = entry.session.format;

        if let Some(entry) = sessions.remove(&user_id) {
            entry.expiry.abort();
        }
        Ok((card, format))
    }

    pub async fn remove(&self, user_id: UserId) -> bool {
        let removed = self.inner.sessions.write().await.remove(&user_id);
        match removed {
            Some(entry) => {
                entry.expiry.abort();
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.sessions.read().await.is_empty()
    }
}

fn spawn_expiry(
    store: Weak<StoreInner>,
    ttl: Duration,
    user_id: UserId,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        let Some(store) = store.upgrade() else {
            return;
        };
        let mut sessions = store.sessions.write().await;
        if sessions
            .get(&user_id)
            .is_some_and(|e| e.session.generation == generation)
        {
            sessions.remove(&user_id);
            tracing::debug!(%user_id, "session expired");
        }
    })
}
