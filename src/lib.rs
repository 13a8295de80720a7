#![forbid(unsafe_code)]
//! Ronda — rotation de tours de garde (ronde de quartier) sur le calendrier.
//!
//! - Rotation quotidienne round-robin, ancrée sur un couple (membre, mois).
//! - Mutations du roster qui préservent la continuité de la rotation.
//! - Grille calendaire 7 colonnes, semaine commençant le dimanche.
//! - État local JSON, sauvegarde explicite et non bloquante pour le calcul.
//! - Dates calendaires locales uniquement ; aucun fuseau horaire.

pub mod calendar;
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod storage;

pub use calendar::{calendar_grid, GridCell};
pub use model::{MonthRef, PersistedState, RosterMember, RosterState};
pub use render::render_month;
pub use scheduler::{
    compute_monthly_schedule, rotation_offset, DaySlot, RemovalRequest, RosterError, Scheduler,
};
pub use session::Session;
pub use storage::{JsonStorage, Storage, STORAGE_KEY};
