use crate::model::{MonthRef, RosterMember, RosterState};
use crate::scheduler::DaySlot;
use anyhow::Context;
use chrono::{Datelike, Duration};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de membres depuis CSV: header `name`, première colonne. Lignes vides ignorées.
pub fn import_members_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RosterMember>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(member) = rec.get(0).and_then(RosterMember::new) {
            out.push(member);
        }
    }
    Ok(out)
}

/// Export CSV du planning mensuel: header `date,weekday,member` (membre vide si non affecté).
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    month: MonthRef,
    schedule: &[DaySlot<'_>],
) -> anyhow::Result<()> {
    let first = month.first_day();
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "member"])?;
    for (offset, slot) in schedule.iter().copied().enumerate() {
        let date = first + Duration::days(offset as i64);
        let date_str = date.format("%Y-%m-%d").to_string();
        let weekday = date.weekday().to_string();
        w.write_record([
            date_str.as_str(),
            weekday.as_str(),
            slot.map(RosterMember::name).unwrap_or(""),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON de l'état (jolie mise en forme)
pub fn export_state_json<P: AsRef<Path>>(path: P, state: &RosterState) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(state)?;
    fs::write(path, s)?;
    Ok(())
}
