//! Point d'entrée de la couche de présentation.
//!
//! La session détient l'état en mémoire (source de vérité), le mois affiché et le stockage.
//! Chaque mutation acceptée est suivie d'une sauvegarde explicite ; un échec de
//! sauvegarde est journalisé, la session passe en état `dirty` et la sauvegarde est
//! retentée à la mutation suivante ou via [`Session::flush`].
//!
//! Un document illisible au chargement est mis de côté avant toute sauvegarde ; s'il ne
//! peut pas l'être, les sauvegardes sont refusées pour ne pas l'écraser.

use crate::calendar::{calendar_grid, GridCell};
use crate::model::{MonthRef, RosterMember, RosterState};
use crate::scheduler::{DaySlot, RemovalRequest, RosterError, Scheduler};
use crate::storage::Storage;
use chrono::NaiveDate;

pub struct Session<S: Storage> {
    scheduler: Scheduler,
    displayed: MonthRef,
    storage: S,
    dirty: bool,
    load_warning: Option<String>,
    saves_blocked: bool,
}

impl<S: Storage> Session<S> {
    /// Ouvre une session affichant le mois de `today`.
    ///
    /// Un état absent donne un roster vide. Un échec de chargement démarre aussi à vide,
    /// conserve le document illisible et reste consultable via [`Session::load_warning`].
    pub fn open(storage: S, today: NaiveDate) -> Self {
        let displayed = MonthRef::containing(today);
        let mut state = RosterState::empty(displayed);
        let mut load_warning = None;
        let mut saves_blocked = false;
        match storage.load() {
            Ok(Some(persisted)) => state.apply(persisted),
            Ok(None) => tracing::debug!("no saved state, starting with an empty roster"),
            Err(err) => {
                tracing::warn!(
                    error = ?err,
                    "could not load saved state, starting with an empty roster"
                );
                let kept = match storage.preserve_unreadable() {
                    Ok(Some(backup)) => format!("previous file kept as {}", backup.display()),
                    Ok(None) => "nothing to keep".to_string(),
                    Err(backup_err) => {
                        tracing::warn!(error = ?backup_err, "could not preserve unreadable state");
                        saves_blocked = true;
                        format!("saving disabled: {backup_err:#}")
                    }
                };
                load_warning = Some(format!(
                    "could not load saved state ({err:#}); starting empty, {kept}"
                ));
            }
        }
        Self {
            scheduler: Scheduler::from_state(state),
            displayed,
            storage,
            dirty: false,
            load_warning,
            saves_blocked,
        }
    }

    /// Motif de l'échec de chargement, s'il y en a eu un.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
    pub fn state(&self) -> &RosterState {
        self.scheduler.state()
    }

    pub fn displayed(&self) -> MonthRef {
        self.displayed
    }
    pub fn show(&mut self, month: MonthRef) {
        self.displayed = month;
    }
    pub fn previous_month(&mut self) -> MonthRef {
        self.displayed = self.displayed.previous();
        self.displayed
    }
    pub fn next_month(&mut self) -> MonthRef {
        self.displayed = self.displayed.next();
        self.displayed
    }

    /// Planning du mois affiché.
    pub fn schedule(&self) -> Vec<DaySlot<'_>> {
        self.scheduler.schedule_for(self.displayed)
    }

    /// Grille du mois affiché.
    pub fn grid(&self) -> Vec<GridCell> {
        calendar_grid(self.displayed)
    }

    pub fn member_on(&self, date: NaiveDate) -> Option<&RosterMember> {
        self.scheduler.member_on(date)
    }

    pub fn add(&mut self, name: &str) -> Option<usize> {
        let idx = self.scheduler.add(name)?;
        self.persist();
        Some(idx)
    }

    /// Ajoute plusieurs membres puis sauvegarde une seule fois. Renvoie le nombre ajouté.
    pub fn add_all<I, N>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let added = names
            .into_iter()
            .filter(|name| self.scheduler.add(name.as_ref()).is_some())
            .count();
        if added > 0 {
            self.persist();
        }
        added
    }

    pub fn request_removal(&self, index: usize) -> Result<RemovalRequest, RosterError> {
        self.scheduler.request_removal(index)
    }

    pub fn confirm_removal(
        &mut self,
        request: &RemovalRequest,
    ) -> Result<RosterMember, RosterError> {
        let removed = self.scheduler.confirm_removal(request)?;
        self.persist();
        Ok(removed)
    }

    pub fn move_up(&mut self, index: usize) -> Result<bool, RosterError> {
        let moved = self.scheduler.move_up(index)?;
        if moved {
            self.persist();
        }
        Ok(moved)
    }

    pub fn move_down(&mut self, index: usize) -> Result<bool, RosterError> {
        let moved = self.scheduler.move_down(index)?;
        if moved {
            self.persist();
        }
        Ok(moved)
    }

    /// Fait démarrer la rotation du mois affiché sur `members[index]`.
    pub fn set_start(&mut self, index: usize) -> Result<(), RosterError> {
        self.scheduler.set_anchor(index, self.displayed)?;
        self.persist();
        Ok(())
    }

    /// Vrai si la dernière sauvegarde a échoué.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retente une sauvegarde en attente.
    pub fn flush(&mut self) -> Result<(), RosterError> {
        if !self.dirty {
            return Ok(());
        }
        if self.saves_blocked {
            return Err(RosterError::PersistenceUnavailable(
                "unreadable saved state could not be preserved".to_string(),
            ));
        }
        self.storage
            .save(self.scheduler.state())
            .map_err(|err| RosterError::PersistenceUnavailable(format!("{err:#}")))?;
        self.dirty = false;
        Ok(())
    }

    fn persist(&mut self) {
        if self.saves_blocked {
            tracing::warn!("not saving over an unreadable state file");
            self.dirty = true;
            return;
        }
        match self.storage.save(self.scheduler.state()) {
            Ok(()) => self.dirty = false,
            Err(err) => {
                tracing::warn!(error = ?err, "could not save roster state");
                self.dirty = true;
            }
        }
    }
}
