// Application state module
// Owns the configuration and the activity roster

use super::types::Config;
use crate::roster::RosterStore;

/// Application state
///
/// Shared across connections behind an `Arc`. The roster carries its
/// own lock; the configuration is read-only after startup.
pub struct AppState {
    pub config: Config,
    pub roster: RosterStore,
}

impl AppState {
    /// Create state with the seeded activity roster
    pub fn new(config: Config) -> Self {
        Self {
            config,
            roster: RosterStore::seeded(),
        }
    }
}
