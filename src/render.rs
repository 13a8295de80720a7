//! Rendu texte d'un mois : une ligne de numéros de jour puis une ligne de noms par semaine.

use crate::calendar::GridCell;
use crate::model::{MonthRef, RosterMember};
use crate::scheduler::DaySlot;
use chrono::Month;

const CELL_WIDTH: usize = 8;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn month_title(month: MonthRef) -> String {
    let name = u8::try_from(month.month() + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?");
    format!("{name} {}", month.year())
}

/// Calendrier 7 colonnes, semaine commençant le dimanche. `-` pour un jour non affecté.
pub fn render_month(month: MonthRef, grid: &[GridCell], schedule: &[DaySlot<'_>]) -> String {
    let mut lines = vec![month_title(month), row(WEEKDAYS.iter().map(|d| d.to_string()))];

    for week in grid.chunks(7) {
        lines.push(row(week.iter().map(|cell| match cell {
            Some(day) => day.to_string(),
            None => String::new(),
        })));
        lines.push(row(week.iter().map(|cell| match cell {
            Some(day) => name_for(schedule, *day),
            None => String::new(),
        })));
    }

    lines.join("\n")
}

fn name_for(schedule: &[DaySlot<'_>], day: u32) -> String {
    let slot = schedule.get(day as usize - 1).copied().flatten();
    match slot {
        Some(member) => truncate(member),
        None => "-".to_string(),
    }
}

fn truncate(member: &RosterMember) -> String {
    member.name().chars().take(CELL_WIDTH - 1).collect()
}

fn row<I: Iterator<Item = String>>(cells: I) -> String {
    cells
        .map(|c| format!("{c:<width$}", width = CELL_WIDTH))
        .collect::<String>()
        .trim_end()
        .to_string()
}
