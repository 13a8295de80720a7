use crate::model::RosterMember;
use std::fmt;
use thiserror::Error;

/// Affectation d'une journée ; `None` = personne de garde.
pub type DaySlot<'a> = Option<&'a RosterMember>;

/// Suppression en attente de confirmation (première phase de `Remove`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    pub index: usize,
    pub member: RosterMember,
}

impl fmt::Display for RemovalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Remove {} ?", self.member)
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("index {index} out of range (roster has {len} members)")]
    OutOfRange { index: usize, len: usize },
    #[error("stale removal request: member at index {index} changed")]
    StaleRemoval { index: usize },
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}
