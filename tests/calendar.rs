//! Integration tests for assigning rounds to dated matchdays.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use league_calendar::{
    assign_calendar, first_matchday_on_or_after, generate_pairings, slot_for_index, Field,
    Match, Resource, Round, SchedulingError, Team, TimeSlot,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("Team {i}"))).collect()
}

fn fields(n: usize) -> Vec<Field> {
    (0..n).map(|i| Field::new(format!("Field {i}"), i as u32)).collect()
}

fn time_slots(n: usize) -> Vec<TimeSlot> {
    (0..n)
        .map(|i| {
            let start = NaiveTime::from_hms_opt(9 + 3 * i as u32, 0, 0).unwrap();
            let end = NaiveTime::from_hms_opt(11 + 3 * i as u32, 30, 0).unwrap();
            TimeSlot::new(format!("Slot {i}"), start, end, i as u32)
        })
        .collect()
}

#[test]
fn first_matchday_is_the_next_saturday() {
    // 2026-03-07 is a Saturday.
    assert_eq!(first_matchday_on_or_after(date(2026, 3, 7)), Some(date(2026, 3, 7)));
    assert_eq!(first_matchday_on_or_after(date(2026, 3, 2)), Some(date(2026, 3, 7)));
    assert_eq!(first_matchday_on_or_after(date(2026, 3, 6)), Some(date(2026, 3, 7)));
    assert_eq!(first_matchday_on_or_after(date(2026, 3, 8)), Some(date(2026, 3, 14)));
}

#[test]
fn no_matchday_after_the_last_representable_date() {
    let last = NaiveDate::MAX;
    let expected = (last.weekday() == Weekday::Sat).then_some(last);
    assert_eq!(first_matchday_on_or_after(last), expected);
}

#[test]
fn slots_fill_every_field_before_the_next_time_slot() {
    assert_eq!(slot_for_index(0, 2, 2), (0, 0));
    assert_eq!(slot_for_index(1, 2, 2), (1, 0));
    assert_eq!(slot_for_index(2, 2, 2), (0, 1));
    assert_eq!(slot_for_index(3, 2, 2), (1, 1));
    // Grid wraps around.
    assert_eq!(slot_for_index(4, 2, 2), (0, 0));
    assert_eq!(slot_for_index(3, 3, 1), (0, 0));
}

#[test]
fn assign_rejects_zero_capacity() {
    let rounds = generate_pairings(&teams(4), 1, false).unwrap();
    assert_eq!(
        assign_calendar(
            &rounds,
            date(2026, 3, 1),
            date(2026, 6, 1),
            0,
            &fields(2),
            &time_slots(2),
        ),
        Err(SchedulingError::InvalidCapacity { capacity: 0 })
    );
}

#[test]
fn assign_rejects_missing_fields_or_time_slots() {
    let rounds = generate_pairings(&teams(4), 1, false).unwrap();
    let (start, end) = (date(2026, 3, 1), date(2026, 6, 1));
    assert_eq!(
        assign_calendar(&rounds, start, end, 2, &[], &time_slots(2)),
        Err(SchedulingError::MissingResource(Resource::Fields))
    );
    assert_eq!(
        assign_calendar(&rounds, start, end, 2, &fields(1), &[]),
        Err(SchedulingError::MissingResource(Resource::TimeSlots))
    );
}

#[test]
fn assign_rejects_start_on_or_after_end() {
    let rounds = generate_pairings(&teams(4), 1, false).unwrap();
    let d = date(2026, 3, 7);
    assert!(matches!(
        assign_calendar(&rounds, d, d, 2, &fields(1), &time_slots(1)),
        Err(SchedulingError::InvalidDateRange { .. })
    ));
}

#[test]
fn five_teams_two_legs_play_one_matchday_per_round() {
    let t = teams(5);
    let rounds = generate_pairings(&t, 2, true).unwrap();
    assert_eq!(rounds.len(), 10);
    let start = date(2026, 3, 7);
    let matchdays = assign_calendar(
        &rounds,
        start,
        date(2026, 12, 31),
        4,
        &fields(2),
        &time_slots(2),
    )
    .unwrap();

    assert_eq!(matchdays.len(), 10);
    for (i, md) in matchdays.iter().enumerate() {
        assert_eq!(md.number, i as u32 + 1);
        assert_eq!(md.date, start + chrono::Days::new(7 * i as u64));
        assert_eq!(md.date.weekday(), Weekday::Sat);
        assert_eq!(md.leg_number, if i < 5 { 1 } else { 2 });
        assert_eq!(md.scheduled_matches.len(), 2);
        assert_eq!(md.byes.len(), 1);
    }
    for team in &t {
        let played = matchdays
            .iter()
            .flat_map(|md| &md.scheduled_matches)
            .filter(|sm| sm.fixture.involves(team.id))
            .count();
        assert_eq!(played, 8);
    }
}

#[test]
fn rounds_over_capacity_split_across_consecutive_saturdays() {
    let rounds = generate_pairings(&teams(8), 1, false).unwrap();
    let start = date(2026, 3, 2);
    let matchdays = assign_calendar(
        &rounds,
        start,
        date(2026, 12, 31),
        3,
        &fields(2),
        &time_slots(2),
    )
    .unwrap();

    assert_eq!(matchdays.len(), 14);
    for (i, md) in matchdays.iter().enumerate() {
        assert!(md.scheduled_matches.len() <= 3);
        let expected = if i % 2 == 0 { 3 } else { 1 };
        assert_eq!(md.scheduled_matches.len(), expected);
        assert_eq!(md.date, date(2026, 3, 7) + chrono::Days::new(7 * i as u64));
        // Both chunks of a round come from the same round.
        let round = md.scheduled_matches[0].fixture.round;
        assert!(md.scheduled_matches.iter().all(|sm| sm.fixture.round == round));
        assert_eq!(round as usize, i / 2 + 1);
    }
}

#[test]
fn matchdays_preserve_round_and_match_order() {
    let rounds = generate_pairings(&teams(9), 2, true).unwrap();
    let matchdays = assign_calendar(
        &rounds,
        date(2026, 3, 1),
        date(2026, 4, 1),
        3,
        &fields(1),
        &time_slots(3),
    )
    .unwrap();
    let expected: Vec<&Match> = rounds.iter().flat_map(|r| r.real_matches()).collect();
    let actual: Vec<&Match> = matchdays
        .iter()
        .flat_map(|md| md.scheduled_matches.iter().map(|sm| &sm.fixture))
        .collect();
    assert_eq!(expected, actual);
    for w in matchdays.windows(2) {
        assert!(w[0].leg_number <= w[1].leg_number);
        assert!(w[0].date < w[1].date);
    }
}

#[test]
fn scheduled_matches_get_sequence_numbers_and_grid_positions() {
    let f = fields(2);
    let s = time_slots(2);
    let rounds = generate_pairings(&teams(8), 1, false).unwrap();
    let matchdays =
        assign_calendar(&rounds, date(2026, 3, 7), date(2026, 9, 1), 4, &f, &s).unwrap();
    let md = &matchdays[0];
    let placements: Vec<_> = md
        .scheduled_matches
        .iter()
        .map(|sm| (sm.sequence_number, sm.field.id, sm.time_slot.id))
        .collect();
    assert_eq!(
        placements,
        vec![
            (1, f[0].id, s[0].id),
            (2, f[1].id, s[0].id),
            (3, f[0].id, s[1].id),
            (4, f[1].id, s[1].id),
        ]
    );
}

#[test]
fn split_round_byes_ride_on_its_first_matchday() {
    let rounds = generate_pairings(&teams(7), 1, false).unwrap();
    let matchdays = assign_calendar(
        &rounds,
        date(2026, 3, 7),
        date(2026, 9, 1),
        2,
        &fields(1),
        &time_slots(1),
    )
    .unwrap();
    // 3 real matches per round: chunks of 2 and 1.
    assert_eq!(matchdays.len(), 14);
    for (i, md) in matchdays.iter().enumerate() {
        assert_eq!(md.byes.len(), if i % 2 == 0 { 1 } else { 0 });
    }
}

#[test]
fn all_bye_rounds_are_skipped() {
    let t = teams(2);
    let rounds = vec![Round {
        leg_number: 1,
        round_number: 1,
        matches: vec![Match::bye(t[0].clone(), 1, 1)],
    }];
    let matchdays = assign_calendar(
        &rounds,
        date(2026, 3, 7),
        date(2026, 9, 1),
        2,
        &fields(1),
        &time_slots(1),
    )
    .unwrap();
    assert!(matchdays.is_empty());
}

#[test]
fn calendar_past_the_last_representable_date_is_an_error() {
    let start = NaiveDate::MAX.checked_sub_days(Days::new(20)).unwrap();
    // 8 teams, one match per matchday: 28 weekly matchdays.
    let rounds = generate_pairings(&teams(8), 1, false).unwrap();
    assert_eq!(
        assign_calendar(&rounds, start, NaiveDate::MAX, 1, &fields(1), &time_slots(1)),
        Err(SchedulingError::InvalidDateRange {
            start,
            end: NaiveDate::MAX,
        })
    );
}

#[test]
fn calendar_ending_near_the_last_representable_date_still_fits() {
    let start = NaiveDate::MAX.checked_sub_days(Days::new(20)).unwrap();
    let rounds = generate_pairings(&teams(2), 1, false).unwrap();
    let matchdays =
        assign_calendar(&rounds, start, NaiveDate::MAX, 1, &fields(1), &time_slots(1)).unwrap();
    assert_eq!(matchdays.len(), 1);
    assert_eq!(matchdays[0].date.weekday(), Weekday::Sat);
}
