// Roster module entry
// The in-memory activity roster: data types, seed table, and the store

mod store;
mod types;

// Re-export public types
pub use store::{RosterError, RosterStore};
pub use types::{seed_activities, Activity};
