//! Team data structure as supplied by the roster provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (opaque; only used for equality).
pub type TeamId = Uuid;

/// A team taking part in the season.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Inactive teams are left out of the calendar.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Team {
    /// Create an active team with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Create an active team with a caller-chosen id.
    pub fn with_id(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
        }
    }
}
