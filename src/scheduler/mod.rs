mod assignment;
mod mutate;
mod types;
mod util;

pub use assignment::{compute_monthly_schedule, member_on, rotation_offset};
pub use types::{DaySlot, RemovalRequest, RosterError};

use crate::model::{MonthRef, RosterMember, RosterState};
use chrono::NaiveDate;

/// Scheduler : détient l'état du roster et expose ses mutations.
///
/// Les mutations conservent l'invariant `anchor_index < members.len()` (roster non vide).
#[derive(Debug, Clone)]
pub struct Scheduler {
    state: RosterState,
}

impl Scheduler {
    /// Roster vide ancré sur `period`.
    pub fn new(period: MonthRef) -> Self {
        Self {
            state: RosterState::empty(period),
        }
    }

    pub fn from_state(state: RosterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn members(&self) -> &[RosterMember] {
        &self.state.members
    }

    pub fn schedule_for(&self, month: MonthRef) -> Vec<DaySlot<'_>> {
        compute_monthly_schedule(month, &self.state)
    }

    pub fn rotation_offset(&self, month: MonthRef) -> Option<usize> {
        rotation_offset(month, &self.state)
    }

    pub fn member_on(&self, date: NaiveDate) -> Option<&RosterMember> {
        member_on(date, &self.state)
    }

    /// Ajoute un membre en fin de rotation. `None` si le nom est vide après trim.
    pub fn add(&mut self, name: &str) -> Option<usize> {
        mutate::add(self, name)
    }

    /// Suppression directe, sans confirmation.
    pub fn remove(&mut self, index: usize) -> Result<RosterMember, RosterError> {
        mutate::remove(self, index)
    }

    pub fn request_removal(&self, index: usize) -> Result<RemovalRequest, RosterError> {
        mutate::request_removal(self, index)
    }

    pub fn confirm_removal(
        &mut self,
        request: &RemovalRequest,
    ) -> Result<RosterMember, RosterError> {
        mutate::confirm_removal(self, request)
    }

    pub fn move_up(&mut self, index: usize) -> Result<bool, RosterError> {
        mutate::move_up(self, index)
    }

    pub fn move_down(&mut self, index: usize) -> Result<bool, RosterError> {
        mutate::move_down(self, index)
    }

    /// Réancre la rotation : `members[index]` sera de garde le 1er jour de `period`.
    pub fn set_anchor(&mut self, index: usize, period: MonthRef) -> Result<(), RosterError> {
        mutate::set_anchor(self, index, period)
    }
}
