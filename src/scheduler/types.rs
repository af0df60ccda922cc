use super::stats::RosterStats;
use crate::calendar::date_key;
use crate::model::{weekday_label, RosterError};
use chrono::{NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Suffixe ajouté au libellé d'un jour de rattrapage.
pub const MAKE_UP_MARKER: &str = "（调休）";

/// Libellé du jour tel qu'il apparaît dans le planning (`三`, `六（调休）`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLabel {
    pub weekday: Weekday,
    pub make_up: bool,
}

impl DayLabel {
    pub fn new(weekday: Weekday, make_up: bool) -> Self {
        Self { weekday, make_up }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(weekday_label(self.weekday))?;
        if self.make_up {
            f.write_str(MAKE_UP_MARKER)?;
        }
        Ok(())
    }
}

/// Sérialisé sous sa forme affichée, comme dans l'export CSV.
#[cfg(feature = "serde")]
impl Serialize for DayLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Une ligne du planning : un jour, une personne.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AssignmentRecord {
    pub date: NaiveDate,
    pub label: DayLabel,
    pub person: String,
}

impl AssignmentRecord {
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }
}

/// Résultat d'une génération : lignes chronologiques + charge par personne.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Schedule {
    pub records: Vec<AssignmentRecord>,
    pub stats: RosterStats,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// Le planning partiel couvre tous les jours antérieurs à `date`.
    #[error("no eligible person for {date}")]
    NoEligiblePerson {
        date: NaiveDate,
        partial: Box<Schedule>,
    },
}
