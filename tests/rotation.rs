#![forbid(unsafe_code)]
use chrono::NaiveDate;
use ronda::{compute_monthly_schedule, rotation_offset, MonthRef, RosterMember, RosterState};

fn state(names: &[&str], anchor_index: usize, anchor: MonthRef) -> RosterState {
    RosterState {
        members: names.iter().map(|n| RosterMember::new(n).unwrap()).collect(),
        anchor_index,
        anchor_period: anchor,
    }
}

fn names(state: &RosterState, month: MonthRef) -> Vec<String> {
    compute_monthly_schedule(month, state)
        .into_iter()
        .map(|slot| slot.map(|m| m.name().to_string()).unwrap_or_else(|| "-".into()))
        .collect()
}

fn month(year: i32, month: u32) -> MonthRef {
    MonthRef::new(year, month).unwrap()
}

#[test]
fn anchor_month_starts_at_anchor_member() {
    let s = state(&["A", "B", "C"], 0, month(2024, 0));
    let jan = names(&s, month(2024, 0));
    assert_eq!(jan.len(), 31);
    assert_eq!(&jan[..7], &["A", "B", "C", "A", "B", "C", "A"]);
}

#[test]
fn following_month_carries_elapsed_days() {
    let s = state(&["A", "B", "C"], 0, month(2024, 0));
    assert_eq!(rotation_offset(month(2024, 1), &s), Some(1));
    let feb = names(&s, month(2024, 1));
    assert_eq!(feb.len(), 29);
    assert_eq!(feb[0], "B");

    // continuité entre le 31 janvier et le 1er février
    let jan = names(&s, month(2024, 0));
    assert_eq!(jan[30], "A");
}

#[test]
fn months_before_anchor_wrap_backwards() {
    let s = state(&["A", "B", "C"], 0, month(2024, 0));
    let dec = names(&s, month(2023, 11));
    assert_eq!(dec[0], "C");
    assert_eq!(dec[30], "C");
}

#[test]
fn set_anchor_month_begins_at_chosen_member() {
    let s = state(&["A", "B", "C"], 2, month(2024, 5));
    assert_eq!(names(&s, month(2024, 5))[0], "C");
}

#[test]
fn periodic_over_roster_size() {
    // février 2015 : 28 jours, donc mars 2015 commence 28 jours plus tard
    let all = ["P1", "P2", "P3", "P4", "P5", "P6", "P7"];
    for n in [1usize, 2, 4, 7] {
        let s = state(&all[..n], n - 1, month(2014, 8));
        let feb = names(&s, month(2015, 1));
        let mar = names(&s, month(2015, 2));
        assert_eq!(&feb[..], &mar[..28], "roster size {n}");
    }
}

#[test]
fn only_day_difference_matters() {
    // décalage de l'ancre et de la cible d'un même nombre de jours (365, année non bissextile)
    let a = state(&["A", "B", "C", "D", "E"], 3, month(2022, 0));
    let b = state(&["A", "B", "C", "D", "E"], 3, month(2023, 0));
    assert_eq!(names(&a, month(2022, 4)), names(&b, month(2023, 4)));
}

#[test]
fn empty_roster_leaves_every_day_unassigned() {
    let s = RosterState::empty(month(2024, 0));
    for m in 0..12 {
        let target = month(2024, m);
        let schedule = compute_monthly_schedule(target, &s);
        assert_eq!(schedule.len() as u32, target.days_in_month());
        assert!(schedule.iter().all(Option::is_none));
    }
    assert_eq!(rotation_offset(month(2024, 3), &s), None);
}

#[test]
fn schedule_is_idempotent() {
    let s = state(&["A", "B", "C", "D"], 1, month(2020, 6));
    let target = month(2031, 9);
    assert_eq!(
        compute_monthly_schedule(target, &s),
        compute_monthly_schedule(target, &s)
    );
}

#[test]
fn member_on_matches_monthly_schedule() {
    let s = state(&["A", "B", "C"], 0, month(2024, 0));
    let feb = compute_monthly_schedule(month(2024, 1), &s);
    for (offset, slot) in feb.iter().enumerate() {
        let date = NaiveDate::from_ymd_opt(2024, 2, offset as u32 + 1).unwrap();
        assert_eq!(ronda::scheduler::member_on(date, &s), *slot);
    }
    let eve = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    assert_eq!(ronda::scheduler::member_on(eve, &s).unwrap().name(), "C");
}
