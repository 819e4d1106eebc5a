//! Fields and time slots supplied by the venue configuration provider.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type FieldId = Uuid;
pub type TimeSlotId = Uuid;

/// A playing field. Fields are used cyclically in their `order`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub order: u32,
}

impl Field {
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            active: true,
            order,
        }
    }
}

/// A time slot on a matchday (e.g. "Morning 09:00-11:30").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub order: u32,
}

impl TimeSlot {
    pub fn new(
        name: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        order: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_time,
            end_time,
            order,
        }
    }
}

fn default_active() -> bool {
    true
}
