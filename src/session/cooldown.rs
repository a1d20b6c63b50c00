use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serenity::model::id::UserId;
use tokio::time::Instant;

pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(3);

/// Per-user search rate limit. Expired entries are pruned on each check.
pub struct Cooldowns {
    window: Duration,
    until: Mutex<HashMap<UserId, Instant>>,
}

impl Default for Cooldowns {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl Cooldowns {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            until: Mutex::new(HashMap::new()),
        }
    }

    /// Start a cooldown for `user_id`, or return the time left on the current one.
    pub fn try_start(&self, user_id: UserId) -> Result<(), Duration> {
        let now = Instant::now();
        let mut until = self.until.lock().unwrap_or_else(PoisonError::into_inner);
        until.retain(|_, deadline| *deadline > now);

        if let Some(deadline) = until.get(&user_id) {
            return Err(*deadline - now);
        }
        until.insert(user_id, now + self.window);
        Ok(())
    }
}

/// Whole seconds left, rounded up.
pub fn remaining_secs(remaining: Duration) -> u64 {
    remaining.as_millis().div_ceil(1000) as u64
}
