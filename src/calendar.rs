//! Arithmétique calendaire : navigation mois par mois et grille 7 colonnes.
//!
//! Semaine commençant le dimanche (0 = dimanche), comme le calendrier affiché.

use crate::model::MonthRef;
use chrono::{Datelike, Months};

/// Une case de grille : `Some(jour)` ou case vide.
pub type GridCell = Option<u32>;

impl MonthRef {
    /// Mois précédent, bascule d'année à janvier. Sature à la borne basse de chrono.
    pub fn previous(self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(self)
    }

    /// Mois suivant, bascule d'année à décembre. Sature à la borne haute de chrono.
    pub fn next(self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(self)
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        match first.checked_add_months(Months::new(1)) {
            Some(next) => next.signed_duration_since(first).num_days() as u32,
            // décembre de la dernière année représentable
            None => 31,
        }
    }

    /// Jour de semaine du 1er du mois (0 = dimanche … 6 = samedi).
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }
}

/// Grille d'affichage du mois : cases vides avant le 1er et après le dernier jour,
/// complétée au plus petit multiple de 7 couvrant `first_weekday + days_in_month`.
pub fn calendar_grid(month: MonthRef) -> Vec<GridCell> {
    let first = month.first_weekday();
    let total_days = month.days_in_month();
    let total_cells = (first + total_days).div_ceil(7) * 7;

    (0..total_cells)
        .map(|i| {
            let day = i as i64 - i64::from(first) + 1;
            if (1..=i64::from(total_days)).contains(&day) {
                Some(day as u32)
            } else {
                None
            }
        })
        .collect()
}
