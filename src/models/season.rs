//! Season configuration, generation request and the generated season calendar.

use crate::models::calendar::Matchday;
use crate::models::fixture::Round;
use crate::models::team::Team;
use crate::models::venue::{Field, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a season (key for the stored calendar).
pub type SeasonId = Uuid;

/// Season parameters from the season configuration provider.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Number of legs (vueltas); each is a full round-robin pass.
    #[serde(default = "default_legs")]
    pub legs: u32,
    pub start_date: NaiveDate,
    /// Advisory: overrunning it produces a warning, not an error.
    pub end_date: NaiveDate,
    /// Max matches per matchday.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Swap home/away on even legs.
    #[serde(default)]
    pub alternate_home_away: bool,
}

fn default_legs() -> u32 {
    1
}

fn default_capacity() -> usize {
    1
}

/// Everything needed to generate one season's calendar.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CalendarRequest {
    pub teams: Vec<Team>,
    pub season: SeasonConfig,
    pub fields: Vec<Field>,
    pub time_slots: Vec<TimeSlot>,
}

/// Non-fatal findings about a generated calendar.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarWarning {
    /// The calendar runs past the configured end date.
    EndDateExceeded {
        last_matchday: NaiveDate,
        end_date: NaiveDate,
    },
    /// Capacity is larger than the field x time-slot grid; grid positions repeat on a matchday.
    SlotGridReused { capacity: usize, slots: usize },
}

impl std::fmt::Display for CalendarWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarWarning::EndDateExceeded {
                last_matchday,
                end_date,
            } => write!(
                f,
                "Last matchday {} falls after the season end date {}",
                last_matchday, end_date
            ),
            CalendarWarning::SlotGridReused { capacity, slots } => write!(
                f,
                "Capacity {} exceeds the {} available field/time-slot combinations",
                capacity, slots
            ),
        }
    }
}

/// Counts describing one generation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub rounds: usize,
    /// Non-bye matches.
    pub matches: usize,
    pub byes: usize,
    pub matchdays: usize,
    /// Rounds that needed more than one matchday.
    pub split_rounds: usize,
    pub first_matchday: Option<NaiveDate>,
    pub last_matchday: Option<NaiveDate>,
}

/// Result of a full season generation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeasonCalendar {
    pub rounds: Vec<Round>,
    pub matchdays: Vec<Matchday>,
    pub summary: GenerationSummary,
    pub warnings: Vec<CalendarWarning>,
}
