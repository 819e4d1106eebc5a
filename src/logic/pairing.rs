//! Round-robin pairings: circle method with bye padding and optional home/away alternation.

use crate::models::{Match, Result, Round, SchedulingError, Team};
use std::collections::HashSet;

/// Circle-method rotation over a fixed buffer of slots.
///
/// Each slot holds the index of a team in the caller's list, or `None` for the bye slot
/// appended when the team count is odd. Slot 0 never moves; every `advance` moves the last
/// slot to position 1 and shifts the rest one place right.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rotation {
    slots: Vec<Option<usize>>,
}

impl Rotation {
    /// Rotation for `team_count` teams in their original order (padded to even length).
    pub fn new(team_count: usize) -> Self {
        let mut slots: Vec<Option<usize>> = (0..team_count).map(Some).collect();
        if team_count % 2 == 1 {
            slots.push(None);
        }
        Self { slots }
    }

    /// Number of slots (always even).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Rounds needed for every slot to meet every other slot once.
    pub fn rounds_per_leg(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Current slot order.
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// Pairs for the current rotation: position `i` against position `len - 1 - i`.
    pub fn pairs(&self) -> impl Iterator<Item = (Option<usize>, Option<usize>)> + '_ {
        let last = self.slots.len().saturating_sub(1);
        (0..self.slots.len() / 2).map(move |i| (self.slots[i], self.slots[last - i]))
    }

    /// Advance to the next round.
    pub fn advance(&mut self) {
        if self.slots.len() > 2 {
            self.slots[1..].rotate_right(1);
        }
    }

    /// Back to the original order.
    pub fn reset(&mut self) {
        let team_count = self.slots.iter().filter(|s| s.is_some()).count();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = (i < team_count).then_some(i);
        }
    }
}

/// Most legs a season may ask for.
pub const MAX_LEGS: u32 = 16;

/// Generate the ordered rounds of every leg.
///
/// Team order is significant: rotation starts from it at every leg and no sorting or
/// shuffling is applied, so the same input always yields the same rounds. On odd legs
/// (and on every leg unless `alternate_home_away`) the lower position is at home.
pub fn generate_pairings(
    teams: &[Team],
    legs: u32,
    alternate_home_away: bool,
) -> Result<Vec<Round>> {
    if teams.len() < 2 {
        return Err(SchedulingError::InsufficientTeams { count: teams.len() });
    }
    if !(1..=MAX_LEGS).contains(&legs) {
        return Err(SchedulingError::InvalidLegCount { legs });
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if !seen.insert(team.id) {
            return Err(SchedulingError::DuplicateTeam(team.id));
        }
    }

    let mut rotation = Rotation::new(teams.len());
    let rounds_per_leg = rotation.rounds_per_leg();
    let pairs_per_round = rotation.len() / 2;
    let mut rounds = Vec::new();

    for leg in 1..=legs {
        rotation.reset();
        let swap_sides = alternate_home_away && leg % 2 == 0;
        for round in 1..=rounds_per_leg as u32 {
            let matches: Vec<Match> = rotation
                .pairs()
                .map(|pair| match pair {
                    (Some(a), Some(b)) => {
                        let (home, away) = if swap_sides { (b, a) } else { (a, b) };
                        Match::fixture(teams[home].clone(), teams[away].clone(), leg, round)
                    }
                    (Some(resting), None) | (None, Some(resting)) => {
                        Match::bye(teams[resting].clone(), leg, round)
                    }
                    (None, None) => unreachable!("rotation holds at most one bye slot"),
                })
                .collect();
            assert_eq!(
                matches.len(),
                pairs_per_round,
                "round {} of leg {} has the wrong number of pairings",
                round,
                leg
            );
            rounds.push(Round {
                leg_number: leg,
                round_number: round,
                matches,
            });
            rotation.advance();
        }
    }

    log::debug!(
        "Generated {} round(s) for {} team(s) over {} leg(s)",
        rounds.len(),
        teams.len(),
        legs
    );
    Ok(rounds)
}
