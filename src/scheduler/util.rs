use super::RosterError;
use chrono::NaiveDate;

pub(super) fn check_index(len: usize, index: usize) -> Result<(), RosterError> {
    if index >= len {
        return Err(RosterError::OutOfRange { index, len });
    }
    Ok(())
}

/// Jours entiers écoulés de `from` à `to` (négatif si `to` précède `from`).
pub(super) fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Ramène un écart signé dans `[0, n)`. `n` doit être non nul.
pub(super) fn normalize(diff: i64, n: usize) -> usize {
    diff.rem_euclid(n as i64) as usize
}
