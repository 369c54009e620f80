// Service exports
pub mod cache;
pub mod roster;

pub use cache::RosterCache;
pub use roster::{RosterClient, RosterError};
