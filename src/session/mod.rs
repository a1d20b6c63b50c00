pub mod cooldown;
pub mod pagination;
pub mod store;

pub use cooldown::Cooldowns;
pub use pagination::{Direction, PageOption, PAGE_SIZE};
pub use store::{Session, SessionError, SessionState, SessionStore};
