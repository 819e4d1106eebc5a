//! Calendar business logic: pairings, matchday assignment, season orchestration, export.

mod calendar;
mod export;
mod pairing;
mod season;

pub use calendar::{
    assign_calendar, first_matchday_on_or_after, slot_for_index, DAYS_BETWEEN_MATCHDAYS,
    MATCHDAY_WEEKDAY,
};
pub use export::{flatten_calendar, project_live_games, write_csv};
pub use pairing::{generate_pairings, Rotation, MAX_LEGS};
pub use season::{generate_season_calendar, summarize};
