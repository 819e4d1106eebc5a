//! Match and Round: the output of the pairing generator.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// One pairing within a round. A bye has no away team: `home_team` is the team resting.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub home_team: Team,
    pub away_team: Option<Team>,
    pub is_bye: bool,
    /// Leg (vuelta) number, 1-based.
    pub leg: u32,
    /// Round number within the leg, 1-based.
    pub round: u32,
}

impl Match {
    /// A real fixture between two teams.
    pub fn fixture(home_team: Team, away_team: Team, leg: u32, round: u32) -> Self {
        Self {
            home_team,
            away_team: Some(away_team),
            is_bye: false,
            leg,
            round,
        }
    }

    /// A bye for `resting_team`.
    pub fn bye(resting_team: Team, leg: u32, round: u32) -> Self {
        Self {
            home_team: resting_team,
            away_team: None,
            is_bye: true,
            leg,
            round,
        }
    }

    /// The resting team if this is a bye.
    pub fn resting_team(&self) -> Option<&Team> {
        self.is_bye.then_some(&self.home_team)
    }

    /// Whether `team_id` plays (or rests) in this match.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team.id == team_id || self.away_team.as_ref().is_some_and(|t| t.id == team_id)
    }
}

/// One round of a leg: every team appears at most once.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub leg_number: u32,
    pub round_number: u32,
    pub matches: Vec<Match>,
}

impl Round {
    /// Matches with an opponent, in original order.
    pub fn real_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| !m.is_bye)
    }

    pub fn byes(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.is_bye)
    }
}
