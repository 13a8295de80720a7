#![forbid(unsafe_code)]
use ronda::{MonthRef, RosterError, Scheduler};

fn month(year: i32, month: u32) -> MonthRef {
    MonthRef::new(year, month).unwrap()
}

fn scheduler(names: &[&str]) -> Scheduler {
    let mut s = Scheduler::new(month(2024, 0));
    for n in names {
        s.add(n).unwrap();
    }
    s
}

fn member_names(s: &Scheduler) -> Vec<&str> {
    s.members().iter().map(|m| m.name()).collect()
}

fn first_day(s: &Scheduler, m: MonthRef) -> String {
    s.schedule_for(m)[0].unwrap().name().to_string()
}

#[test]
fn add_trims_and_ignores_blank_names() {
    let mut s = Scheduler::new(month(2024, 0));
    assert_eq!(s.add("   "), None);
    assert_eq!(s.add(""), None);
    assert_eq!(s.add("  Dewi "), Some(0));
    assert_eq!(s.add("Eko"), Some(1));
    assert_eq!(member_names(&s), ["Dewi", "Eko"]);
    assert_eq!(s.state().anchor_index, 0);
    assert_eq!(s.state().anchor_period, month(2024, 0));
}

#[test]
fn remove_before_anchor_keeps_anchored_member() {
    let mut s = scheduler(&["A", "B", "C", "D"]);
    s.set_anchor(2, month(2024, 0)).unwrap();
    let before = first_day(&s, month(2024, 0));

    let removed = s.remove(0).unwrap();
    assert_eq!(removed.name(), "A");
    assert_eq!(s.state().anchor_index, 1);
    assert_eq!(s.members()[s.state().anchor_index].name(), "C");
    assert_eq!(first_day(&s, month(2024, 0)), before);
}

#[test]
fn remove_after_anchor_leaves_anchor_alone() {
    let mut s = scheduler(&["A", "B", "C", "D"]);
    s.set_anchor(1, month(2024, 0)).unwrap();
    s.remove(3).unwrap();
    assert_eq!(s.state().anchor_index, 1);
    assert_eq!(first_day(&s, month(2024, 0)), "B");
}

#[test]
fn removing_anchored_member_hands_anchor_to_successor() {
    let mut s = scheduler(&["A", "B", "C"]);
    s.set_anchor(1, month(2024, 0)).unwrap();
    s.remove(1).unwrap();
    assert_eq!(s.state().anchor_index, 1);
    assert_eq!(first_day(&s, month(2024, 0)), "C");
}

#[test]
fn removing_anchored_last_member_wraps_anchor() {
    let mut s = scheduler(&["A", "B", "C"]);
    s.set_anchor(2, month(2024, 0)).unwrap();
    s.remove(2).unwrap();
    assert_eq!(s.state().anchor_index, 0);
    assert_eq!(first_day(&s, month(2024, 0)), "A");
}

#[test]
fn removing_everyone_empties_schedule() {
    let mut s = scheduler(&["A", "B"]);
    s.set_anchor(1, month(2024, 0)).unwrap();
    s.remove(1).unwrap();
    s.remove(0).unwrap();
    assert_eq!(s.state().anchor_index, 0);
    assert!(s.schedule_for(month(2024, 0)).iter().all(Option::is_none));
}

#[test]
fn out_of_range_indices_are_rejected_without_mutation() {
    let mut s = scheduler(&["A", "B"]);
    let snapshot = s.state().clone();

    assert!(matches!(s.remove(2), Err(RosterError::OutOfRange { index: 2, len: 2 })));
    assert!(matches!(s.move_up(5), Err(RosterError::OutOfRange { .. })));
    assert!(matches!(s.move_down(2), Err(RosterError::OutOfRange { .. })));
    assert!(matches!(s.set_anchor(9, month(2025, 0)), Err(RosterError::OutOfRange { .. })));
    assert!(matches!(s.request_removal(2), Err(RosterError::OutOfRange { .. })));
    assert_eq!(s.state(), &snapshot);

    let mut empty = Scheduler::new(month(2024, 0));
    assert!(matches!(empty.move_up(0), Err(RosterError::OutOfRange { index: 0, len: 0 })));
}

#[test]
fn moves_are_noops_at_boundaries() {
    let mut s = scheduler(&["A", "B", "C"]);
    assert!(!s.move_up(0).unwrap());
    assert!(!s.move_down(2).unwrap());
    assert_eq!(member_names(&s), ["A", "B", "C"]);

    assert!(s.move_up(2).unwrap());
    assert_eq!(member_names(&s), ["A", "C", "B"]);
    assert!(s.move_down(0).unwrap());
    assert_eq!(member_names(&s), ["C", "A", "B"]);
}

#[test]
fn swapping_does_not_follow_the_anchor() {
    let mut s = scheduler(&["A", "B", "C"]);
    s.move_down(0).unwrap();
    assert_eq!(s.state().anchor_index, 0);
    assert_eq!(first_day(&s, month(2024, 0)), "B");
}

#[test]
fn set_anchor_captures_month() {
    let mut s = scheduler(&["A", "B", "C"]);
    s.set_anchor(2, month(2024, 5)).unwrap();
    assert_eq!(s.state().anchor_period, month(2024, 5));
    assert_eq!(first_day(&s, month(2024, 5)), "C");
    assert_eq!(s.rotation_offset(month(2024, 5)), Some(2));
}

#[test]
fn two_phase_removal() {
    let mut s = scheduler(&["A", "B"]);
    let request = s.request_removal(0).unwrap();
    assert_eq!(request.member.name(), "A");
    assert_eq!(request.to_string(), "Remove A ?");
    assert_eq!(s.members().len(), 2);

    let removed = s.confirm_removal(&request).unwrap();
    assert_eq!(removed.name(), "A");
    assert_eq!(member_names(&s), ["B"]);
}

#[test]
fn stale_removal_is_refused() {
    let mut s = scheduler(&["A", "B"]);
    let request = s.request_removal(0).unwrap();
    s.move_down(0).unwrap();
    assert!(matches!(
        s.confirm_removal(&request),
        Err(RosterError::StaleRemoval { index: 0 })
    ));
    assert_eq!(member_names(&s), ["B", "A"]);
}
