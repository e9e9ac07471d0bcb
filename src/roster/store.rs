// Roster store module
// The owned, lock-guarded activity map; the only mutable state in the process

use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

use super::types::{seed_activities, Activity};

/// Errors produced by roster operations.
///
/// The display strings are the exact `detail` messages the HTTP layer
/// returns: `UnknownActivity` surfaces as 404, the two conflict
/// variants as 400.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotSignedUp,
}

/// The in-memory activity roster.
///
/// One lock guards the whole map: listing takes a read guard, signup
/// and unregister take a write guard. The store is owned by `AppState`
/// and passed by reference; there are no process-wide globals.
pub struct RosterStore {
    activities: RwLock<HashMap<String, Activity>>,
}

impl RosterStore {
    /// Create a store holding the fixed seed table.
    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    /// Create a store from an explicit activity map.
    pub fn with_activities(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Number of activities in the roster.
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Clone the full map for a list response.
    ///
    /// The roster is nine activities with short participant lists, so a
    /// clone per request is cheaper than holding the read guard across
    /// serialization.
    pub async fn snapshot(&self) -> HashMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Add `email` to the participants of the activity called `name`.
    ///
    /// A second signup with the same email is a conflict, not a no-op.
    /// `max_participants` is advertised but not checked here.
    pub async fn signup(&self, name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(RosterError::UnknownActivity)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the participants of the activity called `name`.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(RosterError::UnknownActivity)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotSignedUp);
        };

        activity.participants.remove(position);
        Ok(())
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::seeded()
    }
}
