//! Matchday and ScheduledMatch, plus the flat shapes handed to persistence.

use crate::models::fixture::Match;
use crate::models::team::TeamId;
use crate::models::venue::{Field, FieldId, TimeSlot, TimeSlotId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A match bound to a position on the matchday's field/time-slot grid.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    #[serde(rename = "match")]
    pub fixture: Match,
    /// 1-based, at most the matchday capacity.
    pub sequence_number: u32,
    pub field: Field,
    pub time_slot: TimeSlot,
}

/// A dated matchday holding up to `capacity` matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchday {
    /// 1-based, in emission order across the season.
    pub number: u32,
    pub date: NaiveDate,
    pub leg_number: u32,
    pub capacity: usize,
    pub scheduled_matches: Vec<ScheduledMatch>,
    /// Teams resting in the round this matchday opens. Not counted against capacity.
    #[serde(default)]
    pub byes: Vec<Match>,
}

/// Flat row for the persistence sink.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub matchday_number: u32,
    pub date: NaiveDate,
    pub leg_number: u32,
    pub sequence_number: u32,
    pub home_team_id: TeamId,
    pub away_team_id: Option<TeamId>,
    pub is_bye: bool,
    pub field_id: Option<FieldId>,
    pub time_slot_id: Option<TimeSlotId>,
}

/// Seed for a live (scorekeeping) game record, one per non-bye scheduled match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LiveGameSeed {
    pub matchday_number: u32,
    pub date: NaiveDate,
    pub sequence_number: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub field_id: FieldId,
    pub time_slot_id: TimeSlotId,
    pub start_time: NaiveTime,
}
