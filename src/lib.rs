//! League season calendar: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    assign_calendar, first_matchday_on_or_after, flatten_calendar, generate_pairings,
    generate_season_calendar, project_live_games, slot_for_index, summarize, write_csv,
    Rotation, DAYS_BETWEEN_MATCHDAYS, MATCHDAY_WEEKDAY, MAX_LEGS,
};
pub use models::{
    CalendarRecord, CalendarRequest, CalendarWarning, ErrorKind, Field, FieldId,
    GenerationSummary, LiveGameSeed, Match, Matchday, Resource, Result, Round, ScheduledMatch,
    SchedulingError, SeasonCalendar, SeasonConfig, SeasonId, Team, TeamId, TimeSlot, TimeSlotId,
};
