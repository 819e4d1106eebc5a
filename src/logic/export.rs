//! Flat projections of a calendar for the persistence sink and the scorekeeping subsystem.

use crate::models::{CalendarRecord, LiveGameSeed, Matchday};
use std::io;

/// One record per scheduled match, then one per bye, for every matchday in order.
///
/// Bye rows are numbered after the matchday's last scheduled match and have no
/// away team, field or time slot.
pub fn flatten_calendar(matchdays: &[Matchday]) -> Vec<CalendarRecord> {
    let mut records = Vec::new();
    for md in matchdays {
        for sm in &md.scheduled_matches {
            records.push(CalendarRecord {
                matchday_number: md.number,
                date: md.date,
                leg_number: md.leg_number,
                sequence_number: sm.sequence_number,
                home_team_id: sm.fixture.home_team.id,
                away_team_id: sm.fixture.away_team.as_ref().map(|t| t.id),
                is_bye: false,
                field_id: Some(sm.field.id),
                time_slot_id: Some(sm.time_slot.id),
            });
        }
        let offset = md.scheduled_matches.len() as u32;
        for (i, bye) in md.byes.iter().enumerate() {
            records.push(CalendarRecord {
                matchday_number: md.number,
                date: md.date,
                leg_number: md.leg_number,
                sequence_number: offset + i as u32 + 1,
                home_team_id: bye.home_team.id,
                away_team_id: None,
                is_bye: true,
                field_id: None,
                time_slot_id: None,
            });
        }
    }
    records
}

/// Live game seeds for every non-bye scheduled match.
pub fn project_live_games(matchdays: &[Matchday]) -> Vec<LiveGameSeed> {
    matchdays
        .iter()
        .flat_map(|md| {
            md.scheduled_matches.iter().filter_map(move |sm| {
                let away = sm.fixture.away_team.as_ref()?;
                Some(LiveGameSeed {
                    matchday_number: md.number,
                    date: md.date,
                    sequence_number: sm.sequence_number,
                    home_team_id: sm.fixture.home_team.id,
                    away_team_id: away.id,
                    field_id: sm.field.id,
                    time_slot_id: sm.time_slot.id,
                    start_time: sm.time_slot.start_time,
                })
            })
        })
        .collect()
}

/// Write records as CSV with a header row. Missing ids are written as empty cells.
pub fn write_csv<W: io::Write>(records: &[CalendarRecord], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
