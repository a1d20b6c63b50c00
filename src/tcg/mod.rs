pub mod client;
pub mod embed;
pub mod format;
pub mod models;

pub use client::{CardClient, LookupError};
pub use format::Format;
pub use models::Card;
