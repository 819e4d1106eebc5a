//! Data structures for the season calendar: teams, venues, fixtures, matchdays.

mod calendar;
mod error;
mod fixture;
mod season;
mod team;
mod venue;

pub use calendar::{CalendarRecord, LiveGameSeed, Matchday, ScheduledMatch};
pub use error::{ErrorKind, Resource, Result, SchedulingError};
pub use fixture::{Match, Round};
pub use season::{
    CalendarRequest, CalendarWarning, GenerationSummary, SeasonCalendar, SeasonConfig, SeasonId,
};
pub use team::{Team, TeamId};
pub use venue::{Field, FieldId, TimeSlot, TimeSlotId};
