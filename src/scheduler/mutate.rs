use super::{util, RemovalRequest, RosterError, Scheduler};
use crate::model::{MonthRef, RosterMember};

pub(super) fn add(scheduler: &mut Scheduler, raw: &str) -> Option<usize> {
    let member = RosterMember::new(raw)?;
    tracing::debug!(name = member.name(), "member added");
    scheduler.state.members.push(member);
    Some(scheduler.state.members.len() - 1)
}

pub(super) fn request_removal(
    scheduler: &Scheduler,
    index: usize,
) -> Result<RemovalRequest, RosterError> {
    util::check_index(scheduler.state.members.len(), index)?;
    Ok(RemovalRequest {
        index,
        member: scheduler.state.members[index].clone(),
    })
}

pub(super) fn confirm_removal(
    scheduler: &mut Scheduler,
    request: &RemovalRequest,
) -> Result<RosterMember, RosterError> {
    util::check_index(scheduler.state.members.len(), request.index)?;
    if scheduler.state.members[request.index] != request.member {
        return Err(RosterError::StaleRemoval {
            index: request.index,
        });
    }
    remove(scheduler, request.index)
}

pub(super) fn remove(scheduler: &mut Scheduler, index: usize) -> Result<RosterMember, RosterError> {
    let state = &mut scheduler.state;
    util::check_index(state.members.len(), index)?;

    let removed = state.members.remove(index);
    if index < state.anchor_index {
        state.anchor_index = state.anchor_index.saturating_sub(1);
    } else if index == state.anchor_index {
        // L'ancre reste sur l'emplacement : le successeur hérite du point de départ.
        tracing::warn!(
            index,
            name = removed.name(),
            "anchored member removed, anchor moves to the member now in that slot"
        );
    }

    let len = state.members.len();
    if len == 0 {
        state.anchor_index = 0;
    } else if state.anchor_index >= len {
        state.anchor_index %= len;
    }

    tracing::debug!(index, name = removed.name(), anchor_index = state.anchor_index, "member removed");
    Ok(removed)
}

/// Échange avec le prédécesseur. `Ok(false)` en tête de liste.
///
/// L'ancre n'est pas ajustée : le membre ancré peut changer de nom.
pub(super) fn move_up(scheduler: &mut Scheduler, index: usize) -> Result<bool, RosterError> {
    util::check_index(scheduler.state.members.len(), index)?;
    if index == 0 {
        return Ok(false);
    }
    scheduler.state.members.swap(index - 1, index);
    Ok(true)
}

/// Échange avec le successeur. `Ok(false)` en fin de liste.
pub(super) fn move_down(scheduler: &mut Scheduler, index: usize) -> Result<bool, RosterError> {
    let len = scheduler.state.members.len();
    util::check_index(len, index)?;
    if index + 1 == len {
        return Ok(false);
    }
    scheduler.state.members.swap(index, index + 1);
    Ok(true)
}

pub(super) fn set_anchor(
    scheduler: &mut Scheduler,
    index: usize,
    period: MonthRef,
) -> Result<(), RosterError> {
    util::check_index(scheduler.state.members.len(), index)?;
    scheduler.state.anchor_index = index;
    scheduler.state.anchor_period = period;
    tracing::debug!(index, period = %period, "anchor set");
    Ok(())
}
