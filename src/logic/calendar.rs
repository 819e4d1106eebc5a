//! Calendar assignment: rounds to dated, capacity-bounded matchdays.

use crate::models::{
    Field, Match, Matchday, Resource, Result, Round, ScheduledMatch, SchedulingError, TimeSlot,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Weekday every matchday falls on.
pub const MATCHDAY_WEEKDAY: Weekday = Weekday::Sat;

/// Days between consecutive matchdays.
pub const DAYS_BETWEEN_MATCHDAYS: u64 = 7;

/// First Saturday on or after `date`, or `None` past the last representable date.
pub fn first_matchday_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    let target = MATCHDAY_WEEKDAY.num_days_from_monday();
    let current = date.weekday().num_days_from_monday();
    let offset = (7 + target - current) % 7;
    date.checked_add_days(Days::new(u64::from(offset)))
}

/// Grid position for the match at 0-based `index` within a matchday.
///
/// All fields are filled at the earliest time slot before moving to the next slot;
/// both lists wrap around when exhausted. Returns `(field_index, time_slot_index)`.
///
/// # Panics
///
/// Panics if `field_count` or `time_slot_count` is zero.
pub fn slot_for_index(index: usize, field_count: usize, time_slot_count: usize) -> (usize, usize) {
    (index % field_count, (index / field_count) % time_slot_count)
}

/// Assign rounds, in order, to Saturday matchdays.
///
/// A round that fits within `capacity` plays on a single matchday. A larger round is split
/// into consecutive chunks of `capacity` matches, each on the following Saturday. Byes are
/// not scheduled; they ride along on the first matchday of their round. `end_date` is only
/// checked against `start_date`: overrunning it is left to the caller to report. A calendar
/// that would need a date past `NaiveDate::MAX` fails with `InvalidDateRange`.
pub fn assign_calendar(
    rounds: &[Round],
    start_date: NaiveDate,
    end_date: NaiveDate,
    capacity: usize,
    fields: &[Field],
    time_slots: &[TimeSlot],
) -> Result<Vec<Matchday>> {
    if capacity < 1 {
        return Err(SchedulingError::InvalidCapacity { capacity });
    }
    if fields.is_empty() {
        return Err(SchedulingError::MissingResource(Resource::Fields));
    }
    if time_slots.is_empty() {
        return Err(SchedulingError::MissingResource(Resource::TimeSlots));
    }
    if start_date >= end_date {
        return Err(SchedulingError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    let out_of_range = SchedulingError::InvalidDateRange {
        start: start_date,
        end: end_date,
    };
    // Date of the next matchday; `None` once the calendar runs past `NaiveDate::MAX`.
    let mut cursor = first_matchday_on_or_after(start_date);
    let mut matchdays: Vec<Matchday> = Vec::new();

    for round in rounds {
        let real_matches: Vec<&Match> = round.real_matches().collect();
        if real_matches.is_empty() {
            continue;
        }
        let mut byes: Vec<Match> = round.byes().cloned().collect();

        for chunk in real_matches.chunks(capacity) {
            let date = cursor.ok_or_else(|| out_of_range.clone())?;
            let scheduled_matches = chunk
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    let (field_index, slot_index) =
                        slot_for_index(i, fields.len(), time_slots.len());
                    ScheduledMatch {
                        fixture: (*m).clone(),
                        sequence_number: i as u32 + 1,
                        field: fields[field_index].clone(),
                        time_slot: time_slots[slot_index].clone(),
                    }
                })
                .collect();

            matchdays.push(Matchday {
                number: matchdays.len() as u32 + 1,
                date,
                leg_number: round.leg_number,
                capacity,
                scheduled_matches,
                byes: std::mem::take(&mut byes),
            });
            cursor = date.checked_add_days(Days::new(DAYS_BETWEEN_MATCHDAYS));
        }
    }

    log::debug!(
        "Assigned {} round(s) to {} matchday(s) starting {:?}",
        rounds.len(),
        matchdays.len(),
        matchdays.first().map(|m| m.date)
    );
    Ok(matchdays)
}
