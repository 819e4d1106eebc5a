//! Error kinds returned by the generators.

use crate::models::team::TeamId;
use chrono::NaiveDate;
use serde::Serialize;

/// Resource list that must not be empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Fields,
    TimeSlots,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Fields => write!(f, "field"),
            Resource::TimeSlots => write!(f, "time slot"),
        }
    }
}

/// Machine-readable kind of a [`SchedulingError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InsufficientTeams,
    InvalidLegCount,
    DuplicateTeam,
    InvalidCapacity,
    MissingResource,
    InvalidDateRange,
}

/// Invalid input to calendar generation.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum SchedulingError {
    /// Fewer than two teams to pair.
    #[error("Need at least 2 teams to generate a calendar (got {count})")]
    InsufficientTeams { count: usize },

    /// Legs outside `1..=MAX_LEGS`.
    #[error("Number of legs must be between 1 and {} (got {legs})", crate::logic::MAX_LEGS)]
    InvalidLegCount { legs: u32 },

    /// The same team id was supplied twice.
    #[error("Team {0} appears more than once")]
    DuplicateTeam(TeamId),

    #[error("Matchday capacity must be at least 1 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    /// No fields or no time slots to place matches on.
    #[error("At least one {0} is required")]
    MissingResource(Resource),

    #[error("Start date {start} must be before end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl SchedulingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchedulingError::InsufficientTeams { .. } => ErrorKind::InsufficientTeams,
            SchedulingError::InvalidLegCount { .. } => ErrorKind::InvalidLegCount,
            SchedulingError::DuplicateTeam(_) => ErrorKind::DuplicateTeam,
            SchedulingError::InvalidCapacity { .. } => ErrorKind::InvalidCapacity,
            SchedulingError::MissingResource(_) => ErrorKind::MissingResource,
            SchedulingError::InvalidDateRange { .. } => ErrorKind::InvalidDateRange,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
