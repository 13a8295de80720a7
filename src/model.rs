use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Membre de la ronde. L'identité est purement positionnelle : seul le nom est conservé.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RosterMember(String);

impl RosterMember {
    /// Nom nettoyé (trim). `None` si le résultat est vide.
    pub fn new<S: AsRef<str>>(raw: S) -> Option<Self> {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            return None;
        }
        Some(Self(name.to_owned()))
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RosterMember {
    type Error = &'static str;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or("member name cannot be empty")
    }
}

impl From<RosterMember> for String {
    fn from(member: RosterMember) -> Self {
        member.0
    }
}

impl fmt::Display for RosterMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mois calendaire, `month` indexé à partir de 0 (0 = janvier, 11 = décembre).
///
/// Construit uniquement via [`MonthRef::new`] ou [`MonthRef::containing`] : la valeur
/// désigne toujours un mois représentable par chrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMonthRef", into = "RawMonthRef")]
pub struct MonthRef {
    first: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct RawMonthRef {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthRef> for MonthRef {
    type Error = &'static str;

    fn try_from(raw: RawMonthRef) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month).ok_or("month must be in 0..=11")
    }
}

impl From<MonthRef> for RawMonthRef {
    fn from(month: MonthRef) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
        }
    }
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1).map(|first| Self { first })
    }

    /// Mois contenant `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Mois indexé à partir de 0.
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    /// Premier jour du mois.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month() + 1)
    }
}

/// État complet de la rotation : ordre des membres + point d'ancrage.
///
/// `members[anchor_index]` est de garde le premier jour de `anchor_period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterState {
    pub members: Vec<RosterMember>,
    pub anchor_index: usize,
    pub anchor_period: MonthRef,
}

impl RosterState {
    /// État vide ancré sur `period`.
    pub fn empty(period: MonthRef) -> Self {
        Self {
            members: Vec::new(),
            anchor_index: 0,
            anchor_period: period,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Applique un document persisté partiel : seuls les champs présents écrasent l'état.
    pub fn apply(&mut self, persisted: PersistedState) {
        if let Some(members) = persisted.members {
            self.members = members;
        }
        if let Some(idx) = persisted.anchor_index {
            self.anchor_index = idx;
        }
        if let Some(period) = persisted.anchor_period {
            self.anchor_period = period;
        }
        if self.anchor_index >= self.members.len().max(1) {
            tracing::warn!(
                anchor_index = self.anchor_index,
                members = self.members.len(),
                "persisted anchor out of range, reset to 0"
            );
            self.anchor_index = 0;
        }
    }
}

/// Document persisté, éventuellement partiel : chaque champ absent ou illisible vaut `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub members: Option<Vec<RosterMember>>,
    pub anchor_index: Option<usize>,
    pub anchor_period: Option<MonthRef>,
}
