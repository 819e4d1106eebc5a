//! Full season generation: roster/venue filtering, pairings, calendar, summary and warnings.

use crate::logic::calendar::assign_calendar;
use crate::logic::pairing::generate_pairings;
use crate::models::{
    CalendarRequest, CalendarWarning, Field, GenerationSummary, Matchday, Result, Round,
    SchedulingError, SeasonCalendar, Team, TimeSlot,
};
use std::collections::BTreeMap;

/// Generate the calendar for one season.
///
/// 1. Drop inactive teams and fields.
/// 2. Stable-sort fields and time slots by `order`.
/// 3. Reject a start date on or after the end date.
/// 4. Pair, then assign to matchdays.
///
/// Running past the end date or reusing grid positions is reported as a warning.
pub fn generate_season_calendar(request: &CalendarRequest) -> Result<SeasonCalendar> {
    let season = &request.season;
    if season.start_date >= season.end_date {
        return Err(SchedulingError::InvalidDateRange {
            start: season.start_date,
            end: season.end_date,
        });
    }

    let teams: Vec<Team> = request.teams.iter().filter(|t| t.active).cloned().collect();
    let mut fields: Vec<Field> = request.fields.iter().filter(|f| f.active).cloned().collect();
    fields.sort_by_key(|f| f.order);
    let mut time_slots: Vec<TimeSlot> = request.time_slots.clone();
    time_slots.sort_by_key(|s| s.order);

    let rounds = generate_pairings(&teams, season.legs, season.alternate_home_away)?;
    let matchdays = assign_calendar(
        &rounds,
        season.start_date,
        season.end_date,
        season.capacity,
        &fields,
        &time_slots,
    )?;

    let summary = summarize(&rounds, &matchdays);
    let mut warnings = Vec::new();
    let grid = fields.len() * time_slots.len();
    if season.capacity > grid {
        warnings.push(CalendarWarning::SlotGridReused {
            capacity: season.capacity,
            slots: grid,
        });
    }
    if let Some(last) = summary.last_matchday.filter(|d| *d > season.end_date) {
        warnings.push(CalendarWarning::EndDateExceeded {
            last_matchday: last,
            end_date: season.end_date,
        });
    }
    for w in &warnings {
        log::warn!("{}", w);
    }
    log::debug!(
        "Season calendar: {} round(s), {} match(es), {} bye(s), {} matchday(s)",
        summary.rounds,
        summary.matches,
        summary.byes,
        summary.matchdays
    );

    Ok(SeasonCalendar {
        rounds,
        matchdays,
        summary,
        warnings,
    })
}

/// Counts of rounds, matches, byes and matchdays for a generation.
pub fn summarize(rounds: &[Round], matchdays: &[Matchday]) -> GenerationSummary {
    let matches = rounds.iter().map(|r| r.real_matches().count()).sum();
    let byes = rounds.iter().map(|r| r.byes().count()).sum();

    // Matchdays per (leg, round), taken from the round each scheduled match belongs to.
    let mut per_round: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    for md in matchdays {
        if let Some(first) = md.scheduled_matches.first() {
            *per_round
                .entry((first.fixture.leg, first.fixture.round))
                .or_default() += 1;
        }
    }

    GenerationSummary {
        rounds: rounds.len(),
        matches,
        byes,
        matchdays: matchdays.len(),
        split_rounds: per_round.values().filter(|&&n| n > 1).count(),
        first_matchday: matchdays.first().map(|m| m.date),
        last_matchday: matchdays.last().map(|m| m.date),
    }
}
