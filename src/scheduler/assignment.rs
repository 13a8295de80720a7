use super::{util, DaySlot};
use crate::model::{MonthRef, RosterMember, RosterState};
use chrono::NaiveDate;

/// Index du membre de garde le 1er jour de `target`.
///
/// `None` si le roster est vide.
pub fn rotation_offset(target: MonthRef, state: &RosterState) -> Option<usize> {
    if state.members.is_empty() {
        return None;
    }
    let elapsed = util::days_between(state.anchor_period.first_day(), target.first_day());
    Some(index_after(state, elapsed))
}

/// Planning du mois : une entrée par jour, du 1er au dernier.
///
/// Fonction pure : seul l'écart en jours entre le mois d'ancrage et `target` compte.
/// Un roster vide donne `days_in_month` jours non affectés.
pub fn compute_monthly_schedule(target: MonthRef, state: &RosterState) -> Vec<DaySlot<'_>> {
    let days = target.days_in_month() as usize;
    let Some(offset) = rotation_offset(target, state) else {
        return vec![None; days];
    };
    let n = state.members.len();
    (0..days)
        .map(|d| Some(&state.members[(offset + d) % n]))
        .collect()
}

/// Membre de garde à une date donnée.
pub fn member_on(date: NaiveDate, state: &RosterState) -> Option<&RosterMember> {
    if state.members.is_empty() {
        return None;
    }
    let idx = index_after(state, util::days_between(state.anchor_period.first_day(), date));
    state.members.get(idx)
}

fn index_after(state: &RosterState, elapsed_days: i64) -> usize {
    let n = state.members.len();
    (state.anchor_index + util::normalize(elapsed_days, n)) % n
}
